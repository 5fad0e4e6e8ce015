use eframe::egui;

use crate::event::{EventSink, ShopEvent};
use crate::product::Product;

use super::card::{CardData, show_catalog_card};
use super::images::ImageCache;

/// Page chrome: header with the basket counter and the catalog gallery
#[derive(Debug, Default)]
pub struct PageView {
    catalog: Vec<CardData>,
    counter: usize,
    locked: bool,
}

impl PageView {
    pub fn render_catalog(&mut self, catalog: &[Product]) {
        self.catalog = catalog.iter().map(CardData::from).collect();
    }

    pub fn catalog(&self) -> &[CardData] {
        &self.catalog
    }

    pub fn set_counter(&mut self, counter: usize) {
        self.counter = counter;
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// While locked the gallery ignores input, a modal is on top
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn show(&self, ctx: &egui::Context, images: &mut ImageCache, events: &EventSink) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Web-larek");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let basket = ui.add_enabled(!self.locked, egui::Button::new(format!("🛒 {}", self.counter)));
                    if basket.clicked() {
                        events.emit(ShopEvent::BasketOpen);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.catalog.is_empty() {
                ui.centered_and_justified(|ui| ui.spinner());
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_enabled_ui(!self.locked, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for card in &self.catalog {
                            show_catalog_card(ui, card, images, events);
                        }
                    });
                });
            });
        });
    }
}
