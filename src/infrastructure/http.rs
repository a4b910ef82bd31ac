use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo::net::http::Request;
use serde_json::Value;

use crate::application::ports::JsonSource;
use crate::domain::errors::{InfrastructureResult, NetworkError};
use crate::domain::logging::{LogComponent, get_logger};

/// gloo-based JSON client for the dashboard's own endpoints.
///
/// Endpoints are relative to the page unless a base URL is set.
#[derive(Clone, Debug, Default)]
pub struct DashboardHttpClient {
    base_url: Option<String>,
}

impl DashboardHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()) }
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        match &self.base_url {
            Some(base) if !endpoint.starts_with("http") => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                endpoint.trim_start_matches('/')
            ),
            _ => endpoint.to_string(),
        }
    }

    /// GET `endpoint` and parse the body as JSON.
    pub async fn fetch_json(&self, endpoint: &str) -> Result<Value, NetworkError> {
        let url = self.url_for(endpoint);

        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("GET {}", url));

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                url,
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response.json::<Value>().await.map_err(|e| NetworkError::InvalidJson {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("GET {} parsed", url));
        Ok(body)
    }
}

impl JsonSource for DashboardHttpClient {
    fn get_json<'a>(&'a self, endpoint: &'a str) -> LocalBoxFuture<'a, InfrastructureResult<Value>> {
        async move { self.fetch_json(endpoint).await.map_err(Into::into) }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoints_stay_relative() {
        assert_eq!(DashboardHttpClient::new().url_for("/get_chart_data/"), "/get_chart_data/");
    }

    #[test]
    fn base_url_is_joined_once() {
        let client = DashboardHttpClient::with_base_url("https://dash.example/");
        assert_eq!(
            client.url_for("/profit_chart_data/"),
            "https://dash.example/profit_chart_data/"
        );
        assert_eq!(client.url_for("http://other/x"), "http://other/x");
    }
}
