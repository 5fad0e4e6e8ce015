use crate::error::CheckoutError;
use crate::event::{EventSink, ShopEvent};
use crate::model::Model;
use crate::product::{Product, ProductId};

use super::order::{FormErrors, OrderDraft, OrderField, OrderRequest};

/// The storefront's single source of truth: catalog, basket, preview
/// selection, checkout draft and the latest validation errors.
///
/// Every mutation that views care about is announced through the wrapped
/// [`Model`]; views never read from each other, only from here.
#[derive(Debug)]
pub struct AppState {
    model: Model,
    catalog: Vec<Product>,
    basket: Vec<ProductId>,
    preview: Option<ProductId>,
    order: OrderDraft,
    form_errors: FormErrors,
}

impl AppState {
    pub fn new(events: EventSink) -> Self {
        Self {
            model: Model::new(events),
            catalog: Vec::new(),
            basket: Vec::new(),
            preview: None,
            order: OrderDraft::default(),
            form_errors: FormErrors::new(),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|item| &item.id == id)
    }

    fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.catalog.iter_mut().find(|item| &item.id == id)
    }

    /// Replace the catalog wholesale. Basket entries the new catalog no
    /// longer lists are dropped.
    pub fn set_catalog(&mut self, items: Vec<Product>) {
        let before = self.basket.len();
        self.basket.retain(|id| items.iter().any(|item| &item.id == id));
        let pruned = before - self.basket.len();

        self.catalog = items
            .into_iter()
            .map(|mut item| {
                item.selected = self.basket.contains(&item.id);
                item
            })
            .collect();
        log::info!("catalog set: {} products", self.catalog.len());
        self.model.emit_changes(ShopEvent::ItemsChanged {
            catalog: self.catalog.clone(),
        });
        if pruned > 0 {
            log::warn!("dropped {} basket entries missing from the new catalog", pruned);
            self.emit_basket_changed();
        }
    }

    pub fn preview(&self) -> Option<&ProductId> {
        self.preview.as_ref()
    }

    pub fn preview_item(&self) -> Option<&Product> {
        self.preview.as_ref().and_then(|id| self.product(id))
    }

    /// Select a product for the detail view. The state keeps the id; the
    /// change event carries the resolved product.
    pub fn set_preview(&mut self, id: &ProductId) -> bool {
        let Some(item) = self.product(id).cloned() else {
            log::warn!("preview requested for unknown product {}", id);
            return false;
        };
        self.preview = Some(item.id.clone());
        self.model.emit_changes(ShopEvent::PreviewChanged(item));
        true
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn basket(&self) -> &[ProductId] {
        &self.basket
    }

    /// Basket contents resolved against the catalog, in basket order
    pub fn basket_items(&self) -> Vec<&Product> {
        self.basket.iter().filter_map(|id| self.product(id)).collect()
    }

    pub fn is_in_basket(&self, id: &ProductId) -> bool {
        self.basket.contains(id)
    }

    /// Add a catalog product to the basket. A product already in the basket
    /// is not added twice; returns whether the basket changed.
    pub fn add_to_basket(&mut self, id: &ProductId) -> bool {
        if self.is_in_basket(id) {
            log::debug!("product {} already in basket", id);
            return false;
        }
        let Some(item) = self.product_mut(id) else {
            log::warn!("cannot add unknown product {} to basket", id);
            return false;
        };
        item.selected = true;
        self.basket.push(id.clone());
        self.emit_basket_changed();
        true
    }

    /// Remove every basket entry with the given id
    pub fn delete_product_basket(&mut self, id: &ProductId) -> bool {
        let before = self.basket.len();
        self.basket.retain(|entry| entry != id);
        if self.basket.len() == before {
            return false;
        }
        if let Some(item) = self.product_mut(id) {
            item.selected = false;
        }
        self.emit_basket_changed();
        true
    }

    pub fn get_basket_amount(&self) -> usize {
        self.basket.len()
    }

    /// Sum of basket prices. `None` when any basket item has no price or the
    /// sum does not fit.
    pub fn get_total_price(&self) -> Option<u32> {
        self.basket_items()
            .into_iter()
            .try_fold(0u32, |total, item| total.checked_add(item.price?))
    }

    pub fn clear_basket(&mut self) {
        self.basket.clear();
        self.reset_selected();
        self.emit_basket_changed();
    }

    pub fn reset_selected(&mut self) {
        self.catalog.iter_mut().for_each(|item| item.selected = false);
    }

    fn emit_basket_changed(&self) {
        self.model.emit_changes(ShopEvent::BasketChanged {
            count: self.get_basket_amount(),
            total: self.get_total_price(),
        });
    }

    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    /// Copy basket ids and total into the draft ahead of submission
    pub fn set_items(&mut self) {
        self.order.items = self.basket.clone();
        self.order.total = self.get_total_price();
    }

    /// Update one draft field, then re-run both validators. Each ready event
    /// fires on every call where its fields are all filled in.
    pub fn set_order_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.order.set_field(field, value.into());

        if self.validate_contacts() {
            self.model.emit_changes(ShopEvent::ContactsReady(self.order.clone()));
        }
        if self.validate_order() {
            self.model.emit_changes(ShopEvent::OrderReady(self.order.clone()));
        }
    }

    fn collect_errors(&self, fields: &[OrderField]) -> FormErrors {
        let mut errors = FormErrors::new();
        for &field in fields {
            if self.order.field(field).is_empty() {
                errors.insert(field, field.missing_message());
            }
        }
        errors
    }

    /// Validate email and phone. Replaces the stored errors wholesale.
    pub fn validate_contacts(&mut self) -> bool {
        self.form_errors = self.collect_errors(&[OrderField::Email, OrderField::Phone]);
        self.model
            .emit_changes(ShopEvent::ContactsFormErrorsChange(self.form_errors.clone()));
        self.form_errors.is_empty()
    }

    /// Validate payment and address. Replaces the stored errors wholesale.
    pub fn validate_order(&mut self) -> bool {
        self.form_errors = self.collect_errors(&[OrderField::Address, OrderField::Payment]);
        self.model
            .emit_changes(ShopEvent::OrderFormErrorsChange(self.form_errors.clone()));
        self.form_errors.is_empty()
    }

    /// Build the order body from the synchronized draft
    pub fn order_request(&self) -> Result<OrderRequest, CheckoutError> {
        if self.order.items.is_empty() {
            return Err(CheckoutError::EmptyBasket);
        }
        let total = match self.order.total {
            Some(total) => total,
            None => {
                let unpriced = self
                    .order
                    .items
                    .iter()
                    .find(|id| self.product(id).is_none_or(|item| item.price.is_none()))
                    .cloned()
                    .unwrap_or_else(|| self.order.items[0].clone());
                return Err(CheckoutError::UnpricedItem(unpriced));
            }
        };

        let mut missing =
            self.collect_errors(&[OrderField::Payment, OrderField::Address, OrderField::Email, OrderField::Phone]);
        let payment = self.order.payment_method();
        if payment.is_none() && !missing.contains(OrderField::Payment) {
            missing.insert(OrderField::Payment, OrderField::Payment.missing_message());
        }
        let Some(payment) = payment.filter(|_| missing.is_empty()) else {
            return Err(CheckoutError::Incomplete(missing));
        };

        Ok(OrderRequest {
            payment,
            email: self.order.email.clone(),
            phone: self.order.phone.clone(),
            address: self.order.address.clone(),
            total,
            items: self.order.items.clone(),
        })
    }

    /// Start a fresh checkout draft
    pub fn refresh_order(&mut self) {
        self.order = OrderDraft::default();
        self.form_errors = FormErrors::new();
    }
}
