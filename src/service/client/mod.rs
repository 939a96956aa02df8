pub mod api;
#[cfg(debug_assertions)]
pub mod mock;

use async_trait::async_trait;
use color_eyre::eyre::{Result, WrapErr, bail};
use serde::{Serialize, de::DeserializeOwned};

use crate::models::{Fetched, RequestParams};
use api::PrefRecommendResp;

/// Source of recommendations. An `Err` means the round trip could not be completed.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn recommend(&self, params: &RequestParams) -> Result<Fetched>;
}

pub struct HttpClientImpl {
    client: reqwest::Client,
    endpoint: String,
}

#[async_trait]
impl RecommendationClient for HttpClientImpl {
    async fn recommend(&self, params: &RequestParams) -> Result<Fetched> {
        let resp: PrefRecommendResp = self.get(params).await?;
        tracing::debug!(status = ?resp.status, message = ?resp.message, "prefrecommend resp");
        Ok(resp.into())
    }
}

impl HttpClientImpl {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    async fn get<Q: Serialize + Sync, T: DeserializeOwned>(&self, query: &Q) -> Result<T> {
        let resp = self
            .client
            .get(self.endpoint.as_str())
            .query(query)
            .send()
            .await
            .wrap_err("failed to send request")?;

        handle_resp(resp).await
    }
}

async fn handle_resp<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await.wrap_err("failed to read response body")?;

    if !status.is_success() {
        bail!("request failed: HTTP {status} with body:\n{body}");
    }

    let result: T = serde_json::from_str(&body)
        .wrap_err_with(|| format!("could not deserialize response body:\n{}", body))?;

    Ok(result)
}
