//! Remote shop API and the plumbing that runs its requests off the UI loop.
//!
//! Requests are plain futures. A [`TaskRunner`] drives them to completion and
//! the presenter turns each result into a [`ShopEvent`](crate::event::ShopEvent)
//! posted back to the application's inbox.

mod client;
mod runner;

use std::future::Future;

use crate::error::ApiResult;
use crate::product::{Product, ProductId};
use crate::state::{OrderReceipt, OrderRequest};

pub use client::{ProductApi, parse_response, resolve_image_url};
#[cfg(target_arch = "wasm32")]
pub use runner::LocalRunner;
#[cfg(not(target_arch = "wasm32"))]
pub use runner::ThreadRunner;

#[cfg(not(target_arch = "wasm32"))]
pub type BoxedFuture<T> = futures::future::BoxFuture<'static, T>;
#[cfg(target_arch = "wasm32")]
pub type BoxedFuture<T> = futures::future::LocalBoxFuture<'static, T>;

/// Pending API response
pub type ApiFuture<T> = BoxedFuture<ApiResult<T>>;

/// Fire-and-forget unit of work handed to a [`TaskRunner`]
pub type Task = BoxedFuture<()>;

#[cfg(not(target_arch = "wasm32"))]
pub fn boxed<F>(future: F) -> BoxedFuture<F::Output>
where
    F: Future + Send + 'static,
{
    Box::pin(future)
}

#[cfg(target_arch = "wasm32")]
pub fn boxed<F>(future: F) -> BoxedFuture<F::Output>
where
    F: Future + 'static,
{
    Box::pin(future)
}

/// The calls the storefront makes against the backend
pub trait ShopApi {
    fn get_product_list(&self) -> ApiFuture<Vec<Product>>;

    fn get_product_item(&self, id: &ProductId) -> ApiFuture<Product>;

    fn order_products(&self, order: OrderRequest) -> ApiFuture<OrderReceipt>;

    /// Raw bytes of a product image
    fn get_image(&self, url: &str) -> ApiFuture<Vec<u8>>;
}

/// Drives tasks to completion somewhere other than the UI loop
pub trait TaskRunner {
    fn spawn(&self, task: Task);
}

/// Which call a failure belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    ProductList,
    ProductItem(ProductId),
    Order,
    Image(String),
}

impl std::fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductList => write!(f, "product list"),
            Self::ProductItem(id) => write!(f, "product {}", id),
            Self::Order => write!(f, "order submission"),
            Self::Image(url) => write!(f, "image {}", url),
        }
    }
}
