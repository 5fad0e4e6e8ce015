use eframe::egui;

use crate::event::{EventSink, ShopEvent};

use super::card::price_label;

#[derive(Debug, Default)]
pub struct SuccessView {
    total: u32,
}

impl SuccessView {
    pub fn render(&mut self, total: u32) {
        self.total = total;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn show(&self, ui: &mut egui::Ui, events: &EventSink) {
        ui.vertical_centered(|ui| {
            ui.heading("✔ Order placed");
            ui.label(format!("Charged {}", price_label(Some(self.total))));
            ui.add_space(12.0);
            if ui.button("Back to shopping").clicked() {
                events.emit(ShopEvent::ModalClose);
            }
        });
    }
}
