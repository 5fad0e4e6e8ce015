use eframe::egui::{self, Color32, RichText};

use crate::event::{EventSink, ShopEvent};
use crate::product::{Product, ProductCategory, ProductId};

use super::images::ImageCache;

/// Plain data a product card renders from
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price: Option<u32>,
    pub description: String,
    pub in_basket: bool,
}

impl From<&Product> for CardData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            description: product.description.clone(),
            in_basket: product.selected,
        }
    }
}

impl CardData {
    /// Style modifier for the category badge; `None` for unknown categories
    pub fn category_modifier(&self) -> Option<&'static str> {
        ProductCategory::parse(&self.category).map(ProductCategory::modifier)
    }

    pub fn price_label(&self) -> String {
        price_label(self.price)
    }

    pub fn can_buy(&self) -> bool {
        self.price.is_some_and(|price| price > 0) && !self.in_basket
    }
}

pub fn price_label(price: Option<u32>) -> String {
    match price {
        Some(price) => format!("{} synapses", price),
        None => "Priceless".to_owned(),
    }
}

fn category_color(category: Option<ProductCategory>) -> Option<Color32> {
    category.map(|category| match category {
        ProductCategory::SoftSkill => Color32::from_rgb(131, 250, 157),
        ProductCategory::HardSkill => Color32::from_rgb(250, 169, 131),
        ProductCategory::Additional => Color32::from_rgb(182, 165, 255),
        ProductCategory::Button => Color32::from_rgb(131, 221, 250),
        ProductCategory::Other => Color32::from_rgb(250, 217, 131),
    })
}

fn category_badge(ui: &mut egui::Ui, category: &str) {
    if category.is_empty() {
        return;
    }
    let text = RichText::new(category).small();
    match category_color(ProductCategory::parse(category)) {
        Some(color) => ui.label(text.color(Color32::BLACK).background_color(color)),
        None => ui.label(text),
    };
}

fn card_image(ui: &mut egui::Ui, images: &mut ImageCache, url: &str, max_height: f32) {
    match images.texture(ui.ctx(), url) {
        Some(texture) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(&texture))
                    .max_height(max_height)
                    .maintain_aspect_ratio(true),
            );
        }
        None => {
            ui.add_sized([max_height, max_height], egui::Label::new(RichText::new("🖼").size(32.0)));
        }
    }
}

/// Gallery card; clicking it selects the product for preview
pub fn show_catalog_card(ui: &mut egui::Ui, card: &CardData, images: &mut ImageCache, events: &EventSink) {
    let response = ui
        .group(|ui| {
            ui.set_width(200.0);
            ui.vertical_centered(|ui| {
                category_badge(ui, &card.category);
                card_image(ui, images, &card.image, 120.0);
                ui.strong(&card.title);
                ui.label(card.price_label());
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        log::info!("card selected: {}", card.title);
        events.emit(ShopEvent::CardSelect(card.id.clone()));
    }
}

/// Detail card shown in the modal, with the add-to-basket action
pub fn show_preview_card(ui: &mut egui::Ui, card: &CardData, images: &mut ImageCache, events: &EventSink) {
    ui.horizontal(|ui| {
        card_image(ui, images, &card.image, 200.0);
        ui.vertical(|ui| {
            category_badge(ui, &card.category);
            ui.heading(&card.title);
            ui.label(&card.description);
            ui.add_space(8.0);
            ui.strong(card.price_label());

            let label = if card.in_basket { "In basket" } else { "Add to basket" };
            if ui.add_enabled(card.can_buy(), egui::Button::new(label)).clicked() {
                events.emit(ShopEvent::CardToBasket(card.id.clone()));
            }
        });
    });
}
