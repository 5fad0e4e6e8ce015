//! Renderers. Each view keeps only the plain data it was last rendered with
//! and reports user input as events; none of them owns shop state.

mod basket;
mod card;
mod form;
mod images;
mod modal;
mod page;
mod success;

use eframe::egui;

use crate::event::{EventSink, ShopEvent};

pub use basket::{BasketRow, BasketView};
pub use card::{CardData, price_label, show_catalog_card, show_preview_card};
pub use form::{ContactsFormView, FormStatus, OrderFormView};
pub use images::{ImageCache, ImageSlot, decode_image};
pub use modal::{ModalContent, ModalView};
pub use page::PageView;
pub use success::SuccessView;

#[derive(Debug, Default)]
pub struct Views {
    pub page: PageView,
    pub modal: ModalView,
    pub basket: BasketView,
    pub order: OrderFormView,
    pub contacts: ContactsFormView,
    pub success: SuccessView,
}

impl Views {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the page and, on top of it, the modal
    pub fn show(&mut self, ctx: &egui::Context, images: &mut ImageCache, events: &EventSink) {
        self.page.show(ctx, images, events);

        let Some(content) = self.modal.content().cloned() else {
            return;
        };
        let mut open = true;
        egui::Window::new(content.title())
            .id(egui::Id::new("modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| match &content {
                ModalContent::Preview(card) => show_preview_card(ui, card, images, events),
                ModalContent::Basket => self.basket.show(ui, events),
                ModalContent::Order => self.order.show(ui, events),
                ModalContent::Contacts => self.contacts.show(ui, events),
                ModalContent::Success => self.success.show(ui, events),
            });
        if !open {
            events.emit(ShopEvent::ModalClose);
        }
    }
}
