//! # Remote data gateway
//!
//! [`EntityApi`] is the seam between the request layer and HTTP: one async
//! method per REST operation, implemented for production by
//! [`RestGateway`] over `reqwest` and by in-memory stubs in tests.
//!
//! [`RestGateway`] speaks the conventional per-entity REST contract:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list` | `GET {base}/{resource}?page&size&sort&cacheBuster` |
//! | `get` | `GET {base}/{resource}/{id}` |
//! | `create` | `POST {base}/{resource}` |
//! | `update` | `PUT {base}/{resource}/{id}` |
//! | `partial_update` | `PATCH {base}/{resource}/{id}` |
//! | `delete` | `DELETE {base}/{resource}/{id}` |
//!
//! The list total comes from the `x-total-count` response header.
//! `cacheBuster` carries the current epoch millis so an intermediary cache
//! can never answer a list read. The gateway performs a single attempt per
//! call; failures are returned, never retried.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use store::{EntityId, ListParams};

use crate::error::{GatewayError, Problem};

/// Async interface to one entity's REST endpoint.
pub trait EntityApi<T> {
    fn list(
        &self,
        params: &ListParams,
    ) -> impl Future<Output = Result<(Vec<T>, i64), GatewayError>>;
    fn get(&self, id: i64) -> impl Future<Output = Result<T, GatewayError>>;
    fn create(&self, entity: &T) -> impl Future<Output = Result<T, GatewayError>>;
    fn update(&self, entity: &T) -> impl Future<Output = Result<T, GatewayError>>;
    fn partial_update(&self, entity: &T) -> impl Future<Output = Result<T, GatewayError>>;
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), GatewayError>>;
}

/// `reqwest`-backed [`EntityApi`] implementation.
#[derive(Clone, Debug)]
pub struct RestGateway<T> {
    http: reqwest::Client,
    base_url: String,
    resource: &'static str,
    _entity: PhantomData<T>,
}

impl<T> RestGateway<T> {
    /// `base_url` is the API origin (may be empty for same-origin relative
    /// requests); `resource` the entity path, e.g. `"api/rides"`.
    pub fn new(base_url: impl Into<String>, resource: &'static str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            resource,
            _entity: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    /// List URL for the given params and cache-buster token. Pagination is
    /// only sent alongside an explicit sort; a sortless request takes the
    /// server's default slice.
    fn list_url(&self, params: &ListParams, cache_buster: i64) -> String {
        match &params.sort {
            Some(sort) => format!(
                "{}?page={}&size={}&sort={}&cacheBuster={}",
                self.collection_url(),
                params.page,
                params.size,
                sort,
                cache_buster
            ),
            None => format!("{}?cacheBuster={}", self.collection_url(), cache_buster),
        }
    }
}

impl<T> EntityApi<T> for RestGateway<T>
where
    T: Serialize + DeserializeOwned + EntityId,
{
    async fn list(&self, params: &ListParams) -> Result<(Vec<T>, i64), GatewayError> {
        let url = self.list_url(params, epoch_millis());
        let response = check(self.http.get(&url).send().await?).await?;
        let total_header = response
            .headers()
            .get("x-total-count")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok());
        let entities: Vec<T> = response.json().await?;
        let total_items = total_header.unwrap_or(entities.len() as i64);
        Ok((entities, total_items))
    }

    async fn get(&self, id: i64) -> Result<T, GatewayError> {
        let response = check(self.http.get(self.item_url(id)).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, entity: &T) -> Result<T, GatewayError> {
        let response = check(
            self.http
                .post(self.collection_url())
                .json(entity)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    async fn update(&self, entity: &T) -> Result<T, GatewayError> {
        let id = entity.id().ok_or(GatewayError::MissingId)?;
        let response = check(self.http.put(self.item_url(id)).json(entity).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn partial_update(&self, entity: &T) -> Result<T, GatewayError> {
        let id = entity.id().ok_or(GatewayError::MissingId)?;
        let response =
            check(self.http.patch(self.item_url(id)).json(entity).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        check(self.http.delete(self.item_url(id)).send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into a [`GatewayError::Rejection`], keeping the
/// problem body when one is present.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let problem = response.json::<Problem>().await.ok();
    Err(GatewayError::Rejection {
        status: status.as_u16(),
        problem,
    })
}

fn epoch_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Ride;

    #[test]
    fn list_url_with_sort_carries_pagination() {
        let gateway: RestGateway<Ride> = RestGateway::new("http://localhost:8080", "api/rides");
        let params = ListParams {
            page: 0,
            size: 20,
            sort: Some("id,asc".to_string()),
        };
        assert_eq!(
            gateway.list_url(&params, 1700000000000),
            "http://localhost:8080/api/rides?page=0&size=20&sort=id,asc&cacheBuster=1700000000000"
        );
    }

    #[test]
    fn list_url_without_sort_only_busts_cache() {
        let gateway: RestGateway<Ride> = RestGateway::new("http://localhost:8080/", "api/rides");
        assert_eq!(
            gateway.list_url(&ListParams::default(), 42),
            "http://localhost:8080/api/rides?cacheBuster=42"
        );
    }

    #[test]
    fn item_url_appends_id() {
        let gateway: RestGateway<Ride> = RestGateway::new("", "api/rides");
        assert_eq!(gateway.item_url(7), "/api/rides/7");
    }
}
