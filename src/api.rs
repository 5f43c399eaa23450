use crate::errors::ApiError;
use crate::models::{LastEventSnapshot, Roster, TotalsSnapshot, UserId};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Client for the counting service's four endpoints. Calls never retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub async fn get_totals(&self) -> Result<TotalsSnapshot, ApiError> {
        self.get_json("/api/total").await
    }

    pub async fn get_last_event(&self) -> Result<LastEventSnapshot, ApiError> {
        self.get_json("/api/last").await
    }

    pub async fn get_users(&self) -> Result<Roster, ApiError> {
        self.get_json("/api/users").await
    }

    pub async fn increment(&self, user: &UserId) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/increment")?)
            .query(&[("user", user.to_string())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::rate_limited(status));
        }
        if !status.is_success() {
            return Err(ApiError::unexpected_status(status));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.endpoint(path)?).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::unexpected_status(status));
        }
        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::transport(format!("invalid endpoint {path}: {err}")))
    }
}
