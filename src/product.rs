use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product as issued by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A purchasable item. Identity is `id`; `selected` tracks basket membership
/// and `price` is `None` for items that cannot be bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub price: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub selected: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Option<u32>) -> Self {
        Self {
            id: ProductId::new(id),
            category: String::new(),
            title: title.into(),
            image: String::new(),
            price,
            description: String::new(),
            selected: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn category_kind(&self) -> Option<ProductCategory> {
        ProductCategory::parse(&self.category)
    }

    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

/// Body of `GET /product`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub total: usize,
    pub items: Vec<Product>,
}

/// The fixed set of categories the storefront knows how to style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    SoftSkill,
    HardSkill,
    Additional,
    Button,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        Self::SoftSkill,
        Self::HardSkill,
        Self::Additional,
        Self::Button,
        Self::Other,
    ];

    /// Category label as sent by the API
    pub fn label(self) -> &'static str {
        match self {
            Self::SoftSkill => "софт-скил",
            Self::HardSkill => "хард-скил",
            Self::Additional => "дополнительное",
            Self::Button => "кнопка",
            Self::Other => "другое",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Style modifier appended to the card's category badge
    pub fn modifier(self) -> &'static str {
        match self {
            Self::SoftSkill => "soft",
            Self::HardSkill => "hard",
            Self::Additional => "additional",
            Self::Button => "button",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(ProductCategory::parse("софт-скил"), Some(ProductCategory::SoftSkill));
        assert_eq!(ProductCategory::parse("кнопка").map(ProductCategory::modifier), Some("button"));
        assert_eq!(ProductCategory::parse("misc"), None);
        assert_eq!(ProductCategory::parse(""), None);
    }

    #[test]
    fn test_deserialize_api_item() {
        let json = r#"{
            "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
            "description": "Если планируете решать задачи в тренажёре, берите два.",
            "image": "/5_Dots.svg",
            "title": "+1 час в сутках",
            "category": "софт-скил",
            "price": 750
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "854cef69-976d-4c2a-a18c-2aa45046c390");
        assert_eq!(product.price, Some(750));
        assert!(!product.selected);
        assert_eq!(product.category_kind(), Some(ProductCategory::SoftSkill));
    }

    #[test]
    fn test_deserialize_null_price() {
        let json = r#"{"id": "b", "title": "Мамка-таймер", "price": null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, None);
        assert!(!product.is_purchasable());
        assert!(product.category.is_empty());
    }
}
