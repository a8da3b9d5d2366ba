//! PostgREST backend.

use std::time::Duration;

use pulse_config::StoreConfig;
use serde_json::Value;

use crate::error::StoreError;
use crate::query::Query;

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

/// Service-role client for the datastore's REST interface.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

impl RestBackend {
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when the URL or key is missing.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("conceptpulse/0.1")
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: config.rest_url(),
            key: config.service_role_key.clone(),
        })
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.base_url)
    }

    pub async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}?{}", self.table_url(table), query.to_select_params());
        let resp = self.request(reqwest::Method::GET, &url).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let resp = self
            .request(reqwest::Method::POST, &self.table_url(table))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&rows)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete(&self, table: &str, query: &Query) -> Result<(), StoreError> {
        let params = query.filter_params();
        if params.is_empty() {
            return Err(StoreError::InvalidState(format!(
                "refusing unfiltered delete on {table}"
            )));
        }
        let url = format!("{}?{}", self.table_url(table), params.join("&"));
        let resp = self.request(reqwest::Method::DELETE, &url).send().await?;
        check_response(resp).await?;
        Ok(())
    }

    pub async fn upsert(
        &self,
        table: &str,
        row: Value,
        on_conflict: &[&str],
    ) -> Result<Value, StoreError> {
        let url = format!(
            "{}?on_conflict={}",
            self.table_url(table),
            on_conflict.join(",")
        );
        let resp = self
            .request(reqwest::Method::POST, &url)
            .header("Prefer", MERGE_DUPLICATES)
            .json(&[row])
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let mut rows: Vec<Value> = resp.json().await?;
        if rows.is_empty() {
            return Err(StoreError::InvalidState(format!(
                "upsert into {table} returned no rows"
            )));
        }
        Ok(rows.swap_remove(0))
    }
}

/// Map non-success statuses to [`StoreError::Api`].
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if !resp.status().is_success() {
        return Err(StoreError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
