use eframe::egui;

use crate::event::{EventSink, ShopEvent};
use crate::product::{Product, ProductId};

use super::card::price_label;

#[derive(Debug, Clone, PartialEq)]
pub struct BasketRow {
    /// 1-based position shown next to the title
    pub index: usize,
    pub id: ProductId,
    pub title: String,
    pub price: Option<u32>,
}

/// Basket contents as last rendered
#[derive(Debug, Default)]
pub struct BasketView {
    rows: Vec<BasketRow>,
    total: Option<u32>,
}

impl BasketView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, items: &[&Product], total: Option<u32>) {
        self.rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| BasketRow {
                index: index + 1,
                id: item.id.clone(),
                title: item.title.clone(),
                price: item.price,
            })
            .collect();
        self.total = total;
    }

    pub fn rows(&self) -> &[BasketRow] {
        &self.rows
    }

    pub fn total(&self) -> Option<u32> {
        self.total
    }

    /// Checkout needs at least one item and a payable total
    pub fn can_order(&self) -> bool {
        !self.rows.is_empty() && self.total.is_some_and(|total| total > 0)
    }

    pub fn show(&self, ui: &mut egui::Ui, events: &EventSink) {
        ui.heading("Basket");
        ui.separator();

        if self.rows.is_empty() {
            ui.label("Basket is empty");
        } else {
            egui::Grid::new("basket_rows")
                .num_columns(4)
                .spacing([16.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for row in &self.rows {
                        ui.label(row.index.to_string());
                        ui.label(&row.title);
                        ui.label(price_label(row.price));
                        if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                            events.emit(ShopEvent::BasketDelete(row.id.clone()));
                        }
                        ui.end_row();
                    }
                });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.add_enabled(self.can_order(), egui::Button::new("Checkout")).clicked() {
                events.emit(ShopEvent::BasketOrder);
            }
            ui.strong(match self.total {
                Some(total) => price_label(Some(total)),
                None => "—".to_owned(),
            });
        });
    }
}
