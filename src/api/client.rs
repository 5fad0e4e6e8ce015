use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ShopConfig;
use crate::error::{ApiError, ApiResult};
use crate::product::{Product, ProductId, ProductList};
use crate::state::{OrderReceipt, OrderRequest};

use super::{ApiFuture, ShopApi, boxed};

/// Error body the backend sends with non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the catalog and order endpoints
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: reqwest::Client,
    api_url: String,
    cdn_url: String,
}

impl ProductApi {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            cdn_url: config.cdn_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Prefix relative image paths with the CDN base
pub fn resolve_image_url(cdn_url: &str, image: &str) -> String {
    if image.is_empty() || image.starts_with("http://") || image.starts_with("https://") {
        return image.to_owned();
    }
    if image.starts_with('/') {
        format!("{}{}", cdn_url, image)
    } else {
        format!("{}/{}", cdn_url, image)
    }
}

fn with_cdn(cdn_url: &str, mut product: Product) -> Product {
    product.image = resolve_image_url(cdn_url, &product.image);
    product
}

/// Decode a response body, turning non-2xx statuses into [`ApiError::Status`]
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("request failed")
                    .to_owned()
            });
        return Err(ApiError::Status { status, message });
    }
    Ok(serde_json::from_str(body)?)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    parse_response(status, &body)
}

impl ShopApi for ProductApi {
    fn get_product_list(&self) -> ApiFuture<Vec<Product>> {
        let request = self.client.get(self.endpoint("/product"));
        let cdn_url = self.cdn_url.clone();
        boxed(async move {
            let list: ProductList = read_json(request.send().await?).await?;
            log::debug!("received {} of {} products", list.items.len(), list.total);
            Ok(list
                .items
                .into_iter()
                .map(|item| with_cdn(&cdn_url, item))
                .collect())
        })
    }

    fn get_product_item(&self, id: &ProductId) -> ApiFuture<Product> {
        let request = self.client.get(self.endpoint(&format!("/product/{}", id)));
        let cdn_url = self.cdn_url.clone();
        boxed(async move {
            let item: Product = read_json(request.send().await?).await?;
            Ok(with_cdn(&cdn_url, item))
        })
    }

    fn order_products(&self, order: OrderRequest) -> ApiFuture<OrderReceipt> {
        let request = self.client.post(self.endpoint("/order")).json(&order);
        boxed(async move { read_json(request.send().await?).await })
    }

    fn get_image(&self, url: &str) -> ApiFuture<Vec<u8>> {
        let request = self.client.get(url);
        boxed(async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message: status.canonical_reason().unwrap_or("request failed").to_owned(),
                });
            }
            Ok(response.bytes().await?.to_vec())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_image_url() {
        let cdn = "https://cdn.example/content";
        assert_eq!(resolve_image_url(cdn, "/Soft_Flower.svg"), "https://cdn.example/content/Soft_Flower.svg");
        assert_eq!(resolve_image_url(cdn, "Soft_Flower.svg"), "https://cdn.example/content/Soft_Flower.svg");
        assert_eq!(resolve_image_url(cdn, "https://other/img.png"), "https://other/img.png");
        assert_eq!(resolve_image_url(cdn, ""), "");
    }

    #[test]
    fn test_parse_error_body() {
        let result: ApiResult<OrderReceipt> = parse_response(400, r#"{"error": "Не указан телефон"}"#);
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 400,
                message: "Не указан телефон".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_error_without_body() {
        let result: ApiResult<OrderReceipt> = parse_response(404, "<html>");
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_product_list() {
        let body = r#"{"total": 1, "items": [{"id": "a", "title": "Бэкенд-антистресс", "price": 1000}]}"#;
        let list: ProductList = parse_response(200, body).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].price, Some(1000));

        let broken: ApiResult<ProductList> = parse_response(200, "{");
        assert!(matches!(broken, Err(ApiError::Decode(_))));
    }
}
