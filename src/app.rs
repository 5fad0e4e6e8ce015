use futures::channel::mpsc::{self, UnboundedReceiver};

use crate::api::{ShopApi, TaskRunner};
use crate::event::{EventBus, ShopEvent};
use crate::presenter::{self, Storefront};

pub struct StorefrontApp {
    bus: EventBus<Storefront>,
    shop: Storefront,
    // Responses from the api worker
    inbox: UnboundedReceiver<ShopEvent>,
}

impl std::fmt::Debug for StorefrontApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontApp")
            .field("bus", &self.bus)
            .field("shop", &self.shop)
            .finish_non_exhaustive()
    }
}

impl StorefrontApp {
    /// Build the storefront and kick off the catalog fetch
    pub fn new(api: Box<dyn ShopApi>, tasks: Box<dyn TaskRunner>) -> Self {
        let (inbox_tx, inbox) = mpsc::unbounded();
        let mut bus = EventBus::new();
        presenter::register(&mut bus);
        let shop = Storefront::new(bus.sink(), api, tasks, inbox_tx);
        shop.load_catalog();
        Self { bus, shop, inbox }
    }

    pub fn storefront(&self) -> &Storefront {
        &self.shop
    }

    /// Deliver finished requests and anything the last frame emitted.
    /// Returns the number of events delivered.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(Some(event)) = self.inbox.try_next() {
            self.shop.events().emit(event);
            delivered += self.bus.flush(&mut self.shop);
        }
        delivered + self.bus.flush(&mut self.shop)
    }
}

impl eframe::App for StorefrontApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        let events = self.bus.sink();
        self.shop.views.show(ctx, &mut self.shop.images, &events);

        if self.pump() > 0 {
            ctx.request_repaint();
        }
    }
}
