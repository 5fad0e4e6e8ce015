use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::ProductId;

/// Editable fields of the checkout forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Message shown when the field is left empty
    pub fn missing_message(self) -> &'static str {
        match self {
            Self::Payment => "Choose a payment method",
            Self::Address => "Enter a delivery address",
            Self::Email => "Enter an email",
            Self::Phone => "Enter a phone number",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(Self::Card),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

/// Field-keyed validation messages from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<OrderField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: OrderField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = OrderField> + '_ {
        self.0.keys().copied()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.messages().collect();
        f.write_str(&joined.join("; "))
    }
}

/// The in-progress checkout. `items` and `total` are only meaningful after
/// `AppState::set_items` has synchronized them with the basket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub payment: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<ProductId>,
    pub total: Option<u32>,
}

impl OrderDraft {
    pub fn field(&self, field: OrderField) -> &str {
        match field {
            OrderField::Payment => &self.payment,
            OrderField::Address => &self.address,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::Payment => self.payment = value,
            OrderField::Address => self.address = value,
            OrderField::Email => self.email = value,
            OrderField::Phone => self.phone = value,
        }
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::parse(&self.payment)
    }
}

/// Body of `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u32,
    pub items: Vec<ProductId>,
}

/// Response of `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_shape() {
        let request = OrderRequest {
            payment: PaymentMethod::Card,
            email: "test@test.ru".to_owned(),
            phone: "+71234567890".to_owned(),
            address: "Spb Vosstania 1".to_owned(),
            total: 2200,
            items: vec![ProductId::new("a"), ProductId::new("b")],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["payment"], "card");
        assert_eq!(value["total"], 2200);
        assert_eq!(value["items"][1], "b");
    }

    #[test]
    fn test_receipt_parses() {
        let json = r#"{"id": "28c57cb4-3002-4445-8aa1-2a06a5055ae5", "total": 2200}"#;
        let receipt: OrderReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.total, 2200);
    }

    #[test]
    fn test_form_errors_display_in_field_order() {
        let mut errors = FormErrors::new();
        errors.insert(OrderField::Phone, "no phone");
        errors.insert(OrderField::Email, "no email");
        assert_eq!(errors.to_string(), "no email; no phone");
        assert_eq!(errors.len(), 2);
    }
}
