//! Wiring between the bus, the state container and the views.
//!
//! Views report input as events, handlers here turn those into state
//! mutations, and the state's own change events bring the views up to date.
//! Nothing talks to anything else directly.

use futures::channel::mpsc::UnboundedSender;

use crate::api::{ApiFuture, ApiRequest, ShopApi, TaskRunner, boxed};
use crate::event::{EventBus, EventKind, EventSink, ShopEvent};
use crate::state::AppState;
use crate::views::{CardData, ImageCache, ModalContent, Views};

/// Everything a handler may touch
pub struct Storefront {
    pub state: AppState,
    pub views: Views,
    pub images: ImageCache,
    events: EventSink,
    api: Box<dyn ShopApi>,
    tasks: Box<dyn TaskRunner>,
    inbox: UnboundedSender<ShopEvent>,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("state", &self.state)
            .field("views", &self.views)
            .field("images", &self.images.len())
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// `events` must be the sink of the bus the storefront is dispatched on;
    /// finished requests are posted to `inbox`.
    pub fn new(
        events: EventSink,
        api: Box<dyn ShopApi>,
        tasks: Box<dyn TaskRunner>,
        inbox: UnboundedSender<ShopEvent>,
    ) -> Self {
        Self {
            state: AppState::new(events.clone()),
            views: Views::new(),
            images: ImageCache::new(),
            events,
            api,
            tasks,
            inbox,
        }
    }

    pub fn events(&self) -> &EventSink {
        &self.events
    }

    /// Start fetching the product list
    pub fn load_catalog(&self) {
        log::info!("loading catalog");
        self.request(ApiRequest::ProductList, self.api.get_product_list(), ShopEvent::CatalogLoaded);
    }

    fn request<T, F>(&self, request: ApiRequest, response: ApiFuture<T>, on_success: F)
    where
        T: Send + 'static,
        F: FnOnce(T) -> ShopEvent + Send + 'static,
    {
        let inbox = self.inbox.clone();
        self.tasks.spawn(boxed(async move {
            let event = match response.await {
                Ok(value) => on_success(value),
                Err(err) => ShopEvent::ApiFailed {
                    request,
                    message: err.to_string(),
                },
            };
            if inbox.unbounded_send(event).is_err() {
                log::warn!("inbox closed, dropping response");
            }
        }));
    }

    fn fetch_images(&mut self) {
        let urls: Vec<String> = self
            .state
            .catalog()
            .iter()
            .map(|item| item.image.clone())
            .filter(|url| self.images.request(url))
            .collect();
        for url in urls {
            let response = self.api.get_image(&url);
            let target = url.clone();
            self.request(ApiRequest::Image(url), response, move |bytes| ShopEvent::ImageLoaded {
                url: target,
                bytes,
            });
        }
    }

    fn render_basket(&mut self) {
        let total = self.state.get_total_price();
        self.views.basket.render(&self.state.basket_items(), total);
    }

    fn open_modal(&mut self, content: ModalContent) {
        let was_open = self.views.modal.is_open();
        self.views.modal.open(content);
        if !was_open {
            self.events.emit(ShopEvent::ModalOpen);
        }
    }
}

/// Install the storefront's handlers on the bus
pub fn register(bus: &mut EventBus<Storefront>) {
    bus.on(EventKind::CatalogLoaded, |shop, event| {
        if let ShopEvent::CatalogLoaded(items) = event {
            shop.state.set_catalog(items.clone());
        }
    });

    bus.on(EventKind::ItemsChanged, |shop, event| {
        if let ShopEvent::ItemsChanged { catalog } = event {
            shop.views.page.render_catalog(catalog);
            shop.fetch_images();
        }
    });

    bus.on(EventKind::CardSelect, |shop, event| {
        if let ShopEvent::CardSelect(id) = event {
            shop.state.set_preview(id);
        }
    });

    bus.on(EventKind::PreviewChanged, |shop, event| {
        if let ShopEvent::PreviewChanged(item) = event {
            let response = shop.api.get_product_item(&item.id);
            shop.request(ApiRequest::ProductItem(item.id.clone()), response, ShopEvent::PreviewLoaded);
        }
    });

    bus.on(EventKind::PreviewLoaded, |shop, event| {
        let ShopEvent::PreviewLoaded(item) = event else {
            return;
        };
        if shop.state.preview() != Some(&item.id) {
            log::debug!("ignoring stale preview for {}", item.id);
            return;
        }
        let mut card = CardData::from(item);
        card.in_basket = shop.state.is_in_basket(&item.id);
        shop.open_modal(ModalContent::Preview(card));
    });

    bus.on(EventKind::CardToBasket, |shop, event| {
        if let ShopEvent::CardToBasket(id) = event {
            shop.state.add_to_basket(id);
            shop.events.emit(ShopEvent::ModalClose);
        }
    });

    bus.on(EventKind::BasketChanged, |shop, event| {
        if let ShopEvent::BasketChanged { count, .. } = event {
            shop.views.page.set_counter(*count);
            shop.views.page.render_catalog(shop.state.catalog());
            shop.render_basket();
        }
    });

    bus.on(EventKind::BasketOpen, |shop, _| {
        shop.render_basket();
        shop.open_modal(ModalContent::Basket);
    });

    bus.on(EventKind::BasketDelete, |shop, event| {
        if let ShopEvent::BasketDelete(id) = event {
            shop.state.delete_product_basket(id);
        }
    });

    bus.on(EventKind::BasketOrder, |shop, _| {
        shop.state.set_items();
        shop.views.order.render(shop.state.order());
        shop.open_modal(ModalContent::Order);
    });

    bus.on(EventKind::OrderInputChange, |shop, event| {
        if let ShopEvent::OrderInputChange { field, value } = event {
            shop.state.set_order_field(*field, value.clone());
        }
    });

    bus.on(EventKind::OrderFormErrorsChange, |shop, event| {
        if let ShopEvent::OrderFormErrorsChange(errors) = event {
            shop.views.order.set_errors(errors);
        }
    });

    bus.on(EventKind::ContactsFormErrorsChange, |shop, event| {
        if let ShopEvent::ContactsFormErrorsChange(errors) = event {
            shop.views.contacts.set_errors(errors);
        }
    });

    bus.on(EventKind::OrderSubmit, |shop, _| {
        shop.views.contacts.render(shop.state.order());
        shop.open_modal(ModalContent::Contacts);
    });

    bus.on(EventKind::ContactsSubmit, |shop, _| {
        shop.state.set_items();
        match shop.state.order_request() {
            Ok(order) => {
                log::info!("submitting order for {} items, total {}", order.items.len(), order.total);
                let response = shop.api.order_products(order);
                shop.request(ApiRequest::Order, response, ShopEvent::OrderSuccess);
            }
            Err(err) => log::warn!("cannot submit order: {}", err),
        }
    });

    bus.on(EventKind::OrderSuccess, |shop, event| {
        let ShopEvent::OrderSuccess(receipt) = event else {
            return;
        };
        log::info!("order {} placed, total {}", receipt.id, receipt.total);
        shop.state.clear_basket();
        shop.state.refresh_order();
        shop.views.page.render_catalog(shop.state.catalog());
        shop.views.success.render(receipt.total);
        shop.open_modal(ModalContent::Success);
    });

    bus.on(EventKind::ImageLoaded, |shop, event| {
        if let ShopEvent::ImageLoaded { url, bytes } = event {
            if let Err(err) = shop.images.insert_bytes(url, bytes) {
                log::warn!("{}: {}", url, err);
            }
        }
    });

    bus.on(EventKind::ApiFailed, |shop, event| {
        let ShopEvent::ApiFailed { request, message } = event else {
            return;
        };
        log::error!("{} failed: {}", request, message);
        if let ApiRequest::Image(url) = request {
            shop.images.mark_failed(url);
        }
    });

    bus.on(EventKind::ModalOpen, |shop, _| {
        shop.views.page.set_locked(true);
    });

    bus.on(EventKind::ModalClose, |shop, _| {
        shop.views.modal.close();
        shop.views.page.set_locked(false);
        shop.state.clear_preview();
    });
}
