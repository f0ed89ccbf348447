use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{NewProduct, Product, ProductId};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

const LIST_FAILED: &str = "Failed to fetch products.";
const ADD_FAILED: &str = "Failed to add product.";
const DELETE_FAILED: &str = "Failed to delete the product.";
const CHECK_FAILED: &str = "Could not check the price.";

/// The product endpoints of the tracker backend.
#[async_trait(?Send)]
pub trait ProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;
    async fn add(&self, product: &NewProduct) -> Result<(), ApiError>;
    async fn delete(&self, id: &ProductId) -> Result<(), ApiError>;
    async fn check_price(&self, id: &ProductId) -> Result<f64, ApiError>;
}

pub struct HttpProductApi {
    base: String,
}

impl HttpProductApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&list_url(&self.base)).send().await?;

        if response.ok() {
            Ok(response.json().await?)
        } else {
            Err(status_error(&response, LIST_FAILED))
        }
    }

    async fn add(&self, product: &NewProduct) -> Result<(), ApiError> {
        let response = Request::post(&add_url(&self.base))
            .json(product)?
            .send()
            .await?;

        if response.ok() {
            Ok(())
        } else {
            Err(text_error(response, ADD_FAILED).await)
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let response = Request::delete(&delete_url(&self.base, id)).send().await?;

        if response.ok() {
            Ok(())
        } else {
            Err(status_error(&response, DELETE_FAILED))
        }
    }

    async fn check_price(&self, id: &ProductId) -> Result<f64, ApiError> {
        let response = Request::get(&check_price_url(&self.base, id)).send().await?;

        if response.ok() {
            Ok(response.json().await?)
        } else {
            Err(text_error(response, CHECK_FAILED).await)
        }
    }
}

fn list_url(base: &str) -> String {
    format!("{}/all", base)
}

fn add_url(base: &str) -> String {
    format!("{}/add", base)
}

fn delete_url(base: &str, id: &ProductId) -> String {
    format!("{}/delete/{}", base, id)
}

fn check_price_url(base: &str, id: &ProductId) -> String {
    format!("{}/check-price?pid={}", base, id)
}

fn status_error(response: &Response, message: &str) -> ApiError {
    log::warn!("{} returned {}", response.url(), response.status());
    ApiError::Status {
        status: response.status(),
        message: message.to_string(),
    }
}

/// The backend explains rejected requests in a plain-text body.
async fn text_error(response: Response, fallback: &str) -> ApiError {
    log::warn!("{} returned {}", response.url(), response.status());
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: message_or(body, fallback),
    }
}

fn message_or(body: String, fallback: &str) -> String {
    if body.is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/api/products";

    #[test]
    fn endpoints_hang_off_the_base() {
        assert_eq!(list_url(BASE), "http://localhost:8080/api/products/all");
        assert_eq!(add_url(BASE), "http://localhost:8080/api/products/add");
        assert_eq!(
            delete_url(BASE, &ProductId::Numeric(42)),
            "http://localhost:8080/api/products/delete/42"
        );
        assert_eq!(
            check_price_url(BASE, &ProductId::Numeric(5)),
            "http://localhost:8080/api/products/check-price?pid=5"
        );
    }

    #[test]
    fn text_ids_go_into_the_path_verbatim() {
        let id = ProductId::Text("B0C1XYZ".to_string());
        assert_eq!(delete_url(BASE, &id), format!("{}/delete/B0C1XYZ", BASE));
    }

    #[test]
    fn empty_body_falls_back_to_generic_message() {
        assert_eq!(message_or(String::new(), ADD_FAILED), "Failed to add product.");
        assert_eq!(
            message_or("Duplicate URL".to_string(), ADD_FAILED),
            "Duplicate URL"
        );
    }
}
