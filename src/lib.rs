#![warn(clippy::all, rust_2018_idioms)]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod presenter;
pub mod product;
pub mod state;
pub mod views;

pub use app::StorefrontApp;
pub use config::ShopConfig;
pub use error::{ApiError, CheckoutError};
pub use event::{EventBus, EventKind, EventSink, ShopEvent, Topic};
pub use model::Model;
pub use presenter::Storefront;
pub use product::{Product, ProductCategory, ProductId};
pub use state::AppState;
