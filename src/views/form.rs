use eframe::egui::{self, Color32};

use crate::event::{EventSink, ShopEvent};
use crate::state::{FormErrors, OrderDraft, OrderField, PaymentMethod};

/// Validity and messages a form caches purely for drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStatus {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl FormStatus {
    /// Take the messages for `fields` out of a validation pass
    fn from_errors(errors: &FormErrors, fields: &[OrderField]) -> Self {
        let errors: Vec<String> = fields
            .iter()
            .filter_map(|&field| errors.get(field).map(str::to_owned))
            .collect();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    fn show(&self, ui: &mut egui::Ui) {
        if !self.errors.is_empty() {
            ui.colored_label(Color32::from_rgb(255, 120, 120), self.errors.join("; "));
        }
    }
}

fn text_input(ui: &mut egui::Ui, field: OrderField, label: &str, hint: &str, value: &mut String, events: &EventSink) {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(f32::INFINITY));
    if response.changed() {
        events.emit(ShopEvent::OrderInputChange {
            field,
            value: value.clone(),
        });
    }
}

/// First checkout step: payment method and address
#[derive(Debug, Default)]
pub struct OrderFormView {
    payment: Option<PaymentMethod>,
    address: String,
    status: FormStatus,
}

impl OrderFormView {
    pub const FIELDS: [OrderField; 2] = [OrderField::Payment, OrderField::Address];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, draft: &OrderDraft) {
        self.payment = draft.payment_method();
        self.address = draft.address.clone();
        self.status = FormStatus {
            valid: self.payment.is_some() && !self.address.is_empty(),
            errors: Vec::new(),
        };
    }

    pub fn set_errors(&mut self, errors: &FormErrors) {
        self.status = FormStatus::from_errors(errors, &Self::FIELDS);
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn show(&mut self, ui: &mut egui::Ui, events: &EventSink) {
        ui.heading("Payment");
        ui.horizontal(|ui| {
            for (method, label) in [(PaymentMethod::Card, "Online"), (PaymentMethod::Cash, "On delivery")] {
                if ui.selectable_label(self.payment == Some(method), label).clicked() {
                    self.payment = Some(method);
                    events.emit(ShopEvent::OrderInputChange {
                        field: OrderField::Payment,
                        value: method.as_str().to_owned(),
                    });
                }
            }
        });
        ui.add_space(8.0);
        text_input(ui, OrderField::Address, "Delivery address", "Enter an address", &mut self.address, events);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(self.status.valid, egui::Button::new("Next")).clicked() {
                events.emit(ShopEvent::OrderSubmit);
            }
            self.status.show(ui);
        });
    }
}

/// Second checkout step: email and phone
#[derive(Debug, Default)]
pub struct ContactsFormView {
    email: String,
    phone: String,
    status: FormStatus,
}

impl ContactsFormView {
    pub const FIELDS: [OrderField; 2] = [OrderField::Email, OrderField::Phone];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, draft: &OrderDraft) {
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
        self.status = FormStatus {
            valid: !self.email.is_empty() && !self.phone.is_empty(),
            errors: Vec::new(),
        };
    }

    pub fn set_errors(&mut self, errors: &FormErrors) {
        self.status = FormStatus::from_errors(errors, &Self::FIELDS);
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn show(&mut self, ui: &mut egui::Ui, events: &EventSink) {
        ui.heading("Contacts");
        text_input(ui, OrderField::Email, "Email", "Enter an email", &mut self.email, events);
        ui.add_space(4.0);
        text_input(ui, OrderField::Phone, "Phone", "+7 (", &mut self.phone, events);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(self.status.valid, egui::Button::new("Pay")).clicked() {
                events.emit(ShopEvent::ContactsSubmit);
            }
            self.status.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_only_keeps_its_own_fields() {
        let mut errors = FormErrors::new();
        errors.insert(OrderField::Email, OrderField::Email.missing_message());
        errors.insert(OrderField::Address, OrderField::Address.missing_message());

        let mut order = OrderFormView::new();
        order.set_errors(&errors);
        assert!(!order.status().valid);
        assert_eq!(order.status().errors, vec![OrderField::Address.missing_message().to_owned()]);

        let mut contacts = ContactsFormView::new();
        contacts.set_errors(&FormErrors::new());
        assert!(contacts.status().valid);
    }

    #[test]
    fn test_render_seeds_validity_from_draft() {
        let draft = OrderDraft {
            payment: "cash".to_owned(),
            address: "Moscow".to_owned(),
            ..OrderDraft::default()
        };
        let mut order = OrderFormView::new();
        order.render(&draft);
        assert!(order.status().valid);

        let mut contacts = ContactsFormView::new();
        contacts.render(&draft);
        assert!(!contacts.status().valid);

        let draft = OrderDraft {
            payment: "card".to_owned(),
            address: " ".to_owned(),
            email: " ".to_owned(),
            phone: " ".to_owned(),
            ..OrderDraft::default()
        };
        order.render(&draft);
        assert!(order.status().valid);
        contacts.render(&draft);
        assert!(contacts.status().valid);
    }
}
