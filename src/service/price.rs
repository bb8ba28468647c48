//! Bitcoin price lookup used by the `bitcoin` command.

use serde::Deserialize;

use crate::error::{internal::InternalError, AppError};

#[derive(Debug, Deserialize)]
struct PriceResponse {
    bpi: PriceIndex,
}

#[derive(Debug, Deserialize)]
struct PriceIndex {
    #[serde(rename = "USD")]
    usd: Currency,
}

#[derive(Debug, Deserialize)]
struct Currency {
    rate: String,
}

pub struct PriceService<'a> {
    http_client: &'a reqwest::Client,
    url: &'a str,
}

impl<'a> PriceService<'a> {
    /// Creates a new PriceService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `url` - Current price endpoint returning the CoinDesk `bpi` document
    pub fn new(http_client: &'a reqwest::Client, url: &'a str) -> Self {
        Self { http_client, url }
    }

    /// Fetches the current bitcoin price in USD as formatted by the API, e.g. `"43,123.4567"`.
    ///
    /// The endpoint serves JSON as `application/javascript`, so the body is read as text
    /// and parsed here rather than through `Response::json`.
    ///
    /// # Returns
    /// - `Ok(String)` - Formatted USD rate
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned a non-success status
    /// - `Err(AppError::InternalErr)` - Response body had an unexpected shape
    pub async fn bitcoin_usd_rate(&self) -> Result<String, AppError> {
        let body = self
            .http_client
            .get(self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_usd_rate(&body)
    }
}

fn parse_usd_rate(body: &str) -> Result<String, AppError> {
    let response: PriceResponse = serde_json::from_str(body).map_err(|e| {
        InternalError::UnexpectedResponse {
            source_name: "bitcoin price API",
            reason: e.to_string(),
        }
    })?;

    Ok(response.bpi.usd.rate)
}
