//! HTTP implementation of [`CafeApi`] on top of `reqwest`.

use super::{ApiError, CafeApi};
use crate::model::{
    Category, MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, OrderStatus,
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Error body produced by the service, e.g. `{"detail": "Order not found"}`.
///
/// Validation failures carry a list instead of a string, so the value is
/// kept loose.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// `base_url` is the service root; paths are appended under `/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    /// Turn a response into `T`, mapping 404 and other failures to [`ApiError`].
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let detail = match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(text),
            }) => text,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => String::from_utf8_lossy(&body).into_owned(),
        };
        warn!(status = status.as_u16(), %detail, "Request rejected");

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ApiError::NotFound(detail))
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[async_trait]
impl CafeApi for HttpApi {
    #[instrument(skip(self))]
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let url = self.endpoint(&["menu"])?;
        debug!(%url, "Sending request");
        Self::read(self.client.get(url).send().await?).await
    }

    #[instrument(skip(self))]
    async fn list_menu_by_category(&self, category: Category) -> Result<Vec<MenuItem>, ApiError> {
        let url = self.endpoint(&["menu", "category", category.as_str()])?;
        debug!(%url, "Sending request");
        Self::read(self.client.get(url).send().await?).await
    }

    #[instrument(skip(self))]
    async fn get_menu_item(&self, id: &MenuItemId) -> Result<MenuItem, ApiError> {
        let url = self.endpoint(&["menu", &id.0])?;
        debug!(%url, "Sending request");
        Self::read(self.client.get(url).send().await?).await
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    async fn create_menu_item(&self, item: &MenuItemCreate) -> Result<MenuItem, ApiError> {
        let url = self.endpoint(&["menu"])?;
        debug!(%url, "Sending request");
        Self::read(self.client.post(url).json(item).send().await?).await
    }

    #[instrument(skip(self, item))]
    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        item: &MenuItemCreate,
    ) -> Result<MenuItem, ApiError> {
        let url = self.endpoint(&["menu", &id.0])?;
        debug!(%url, "Sending request");
        Self::read(self.client.put(url).json(item).send().await?).await
    }

    #[instrument(skip(self, order), fields(customer = %order.customer_name, lines = order.items.len()))]
    async fn create_order(&self, order: &OrderCreate) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders"])?;
        debug!(%url, "Sending request");
        Self::read(self.client.post(url).json(order).send().await?).await
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint(&["orders"])?;
        debug!(%url, "Sending request");
        Self::read(self.client.get(url).send().await?).await
    }

    #[instrument(skip(self))]
    async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders", &id.0])?;
        debug!(%url, "Sending request");
        Self::read(self.client.get(url).send().await?).await
    }

    #[instrument(skip(self))]
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders", &id.0, "status"])?;
        debug!(%url, %status, "Sending request");
        let request = self
            .client
            .patch(url)
            .query(&[("status", status.as_str())]);
        Self::read(request.send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_under_api() {
        let api = api("http://localhost:8000");
        assert_eq!(
            api.endpoint(&["menu"]).unwrap().as_str(),
            "http://localhost:8000/api/menu"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_escapes_ids() {
        let api = api("https://cafe.example.com/backend/");
        let url = api.endpoint(&["orders", "a b/c", "status"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cafe.example.com/backend/api/orders/a%20b%2Fc/status"
        );
    }

    #[test]
    fn test_rejects_unusable_base() {
        assert!(matches!(
            HttpApi::new("not a url", Duration::from_secs(1)),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpApi::new("mailto:barista@example.com", Duration::from_secs(1)),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    /// Answer a single request with `status` and `body`. The task yields the
    /// raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (HttpApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).into_owned();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let length = text[..head_end]
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                        .map_or(0, |(_, value)| value.trim().parse::<usize>().unwrap());
                    if request.len() >= head_end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        let api = HttpApi {
            client: Client::builder().no_proxy().build().unwrap(),
            base: Url::parse(&base).unwrap(),
        };
        (api, server)
    }

    #[tokio::test]
    async fn test_status_update_is_patch_with_query() {
        let (api, server) = serve_once("404 Not Found", r#"{"detail": "Order not found"}"#).await;

        let err = api
            .update_order_status(&OrderId::from("o-1"), OrderStatus::Ready)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref detail) if detail == "Order not found"));
        assert!(err.is_not_found());

        let request = server.await.unwrap();
        assert!(request.starts_with("PATCH /api/orders/o-1/status?status=ready HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_validation_detail_list_maps_to_status() {
        let (api, server) = serve_once(
            "422 Unprocessable Entity",
            r#"{"detail": [{"loc": ["body", "customer_name"], "msg": "field required"}]}"#,
        )
        .await;

        let err = api.list_orders().await.unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(server.await.unwrap().starts_with("GET /api/orders HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_plain_error_body_is_kept_as_detail() {
        let (api, server) = serve_once("500 Internal Server Error", "Internal Server Error").await;

        let err = api.list_menu().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 500, ref detail } if detail == "Internal Server Error"
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (api, server) = serve_once("200 OK", r#"{"items": "soon"}"#).await;

        let err = api.list_menu().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_update_menu_item_puts_json_body() {
        let (api, server) = serve_once(
            "200 OK",
            r#"{"id": "m-1", "name": "Karak", "name_ar": "كرك", "description": "Spiced tea",
                "description_ar": "", "price": 9, "category": "traditional_coffee"}"#,
        )
        .await;

        let change = MenuItemCreate {
            name: "Karak".to_string(),
            name_ar: "كرك".to_string(),
            description: "Spiced tea".to_string(),
            description_ar: String::new(),
            price: Decimal::new(9, 0),
            category: Category::TraditionalCoffee,
            image_url: None,
            available: true,
        };
        let updated = api
            .update_menu_item(&MenuItemId::from("m-1"), &change)
            .await
            .unwrap();
        assert_eq!(updated.price, Decimal::new(9, 0));
        assert!(updated.available);

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /api/menu/m-1 HTTP/1.1\r\n"));
        assert!(request.contains(r#""name":"Karak""#));
        assert!(request.contains(r#""category":"traditional_coffee""#));
    }
}
