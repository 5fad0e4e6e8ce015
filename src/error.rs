use thiserror::Error;

use crate::product::ProductId;
use crate::state::FormErrors;

/// Errors returned by the remote shop API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Reasons an order draft cannot be turned into a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("The basket is empty")]
    EmptyBasket,

    #[error("Product {0} has no price and cannot be ordered")]
    UnpricedItem(ProductId),

    #[error("Order form is incomplete: {0}")]
    Incomplete(FormErrors),
}

/// Errors that can occur while decoding a product image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to parse svg: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Invalid image dimensions")]
    InvalidDimensions,
}
