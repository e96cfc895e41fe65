//! CodeChain indexer API client.
//!
//! All endpoints are relative to the configured base URL:
//!
//! - `tx/<hash>` - one transaction
//! - `tx?page=&itemsPerPage=` - one page of the latest transactions
//! - `tx/count` - total transaction count
//! - `status/sync` - indexer sync status
//! - `block/<number>` - one block with its transactions

use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use super::http::{HttpConfig, endpoint_url, parse_base_url};
use crate::domain::transaction::parsing::{parse_transaction_list, strip_hex_prefix};
use crate::domain::{Block, ExplorerError, SyncStatus, Transaction};

// ============================================================================
// Indexer Client
// ============================================================================

/// Typed client for the CodeChain indexer.
#[derive(Debug, Clone)]
pub struct IndexerClient {
    client: Client,
    base_url: Url,
}

impl IndexerClient {
    /// Create a client for the indexer at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::InvalidInput` for an unusable URL and
    /// `ExplorerError::ClientInit` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ExplorerError> {
        Self::with_config(base_url, &HttpConfig::default())
    }

    /// Create a client with custom HTTP settings.
    ///
    /// # Errors
    ///
    /// See [`IndexerClient::new`].
    pub fn with_config(base_url: &str, config: &HttpConfig) -> Result<Self, ExplorerError> {
        Ok(Self {
            client: config.build_client()?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_indexer_request(&self, url: Url) -> reqwest::RequestBuilder {
        self.client.get(url).header("accept", "application/json")
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// Returns `Ok(None)` on 404 so callers can map it to "not found".
    async fn get_json(&self, url: Url) -> Result<Option<Value>, ExplorerError> {
        tracing::debug!("GET {url}");
        let response = self.build_indexer_request(url.clone()).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ExplorerError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let json = response
            .json::<Value>()
            .await
            .map_err(|e| ExplorerError::parse(format!("invalid JSON from {url}: {e}")))?;
        Ok(Some(json))
    }

    async fn get_required(&self, url: Url, entity: &'static str) -> Result<Value, ExplorerError> {
        let id = url.path().to_string();
        self.get_json(url)
            .await?
            .ok_or_else(|| ExplorerError::not_found(entity, id))
    }

    /// Fetch a single transaction by hash, with or without `0x`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the indexer does not know the hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the record breaks the data
    /// contract.
    pub async fn get_transaction(&self, hash: &str) -> Result<Option<Transaction>, ExplorerError> {
        let url = transaction_url(&self.base_url, hash)?;
        match self.get_json(url).await? {
            Some(json) if !json.is_null() => Transaction::from_json(&json).map(Some),
            _ => Ok(None),
        }
    }

    /// Fetch one page of the latest transactions.
    ///
    /// Malformed records are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    pub async fn get_transactions(
        &self,
        page: u64,
        items_per_page: u64,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        let url = transactions_url(&self.base_url, page, items_per_page)?;
        let json = self.get_required(url, "transaction page").await?;
        transaction_records(&json).map(parse_transaction_list)
    }

    /// Fetch the total number of indexed transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a count.
    pub async fn get_transaction_count(&self) -> Result<u64, ExplorerError> {
        let url = endpoint_url(&self.base_url, "tx/count", &[])?;
        let json = self.get_required(url, "transaction count").await?;
        parse_count(&json)
    }

    /// Fetch the indexer sync status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body has the wrong shape.
    pub async fn get_sync_status(&self) -> Result<SyncStatus, ExplorerError> {
        let url = endpoint_url(&self.base_url, "status/sync", &[])?;
        let json = self.get_required(url, "sync status").await?;
        serde_json::from_value(json)
            .map_err(|e| ExplorerError::parse(format!("invalid sync status: {e}")))
    }

    /// Fetch a block by number.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the block is not indexed yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the block record is malformed.
    pub async fn get_block(&self, number: u64) -> Result<Option<Block>, ExplorerError> {
        let url = endpoint_url(&self.base_url, &format!("block/{number}"), &[])?;
        match self.get_json(url).await? {
            Some(json) if !json.is_null() => Block::from_json(&json).map(Some),
            _ => Ok(None),
        }
    }
}

// ============================================================================
// Request and Response Helpers
// ============================================================================

fn transaction_url(base: &Url, hash: &str) -> Result<Url, ExplorerError> {
    let hash = strip_hex_prefix(hash.trim());
    if hash.is_empty() || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ExplorerError::invalid_input(format!(
            "'{hash}' is not a transaction hash"
        )));
    }
    endpoint_url(base, &format!("tx/{hash}"), &[])
}

fn transactions_url(base: &Url, page: u64, items_per_page: u64) -> Result<Url, ExplorerError> {
    endpoint_url(
        base,
        "tx",
        &[
            ("page", page.to_string()),
            ("itemsPerPage", items_per_page.to_string()),
        ],
    )
}

/// The list endpoint answers with a bare array; some deployments wrap it.
fn transaction_records(json: &Value) -> Result<&[Value], ExplorerError> {
    let records = match json {
        Value::Array(records) => Some(records),
        Value::Object(obj) => obj
            .get("transactions")
            .or_else(|| obj.get("data"))
            .and_then(Value::as_array),
        _ => None,
    };
    records
        .map(Vec::as_slice)
        .ok_or_else(|| ExplorerError::parse("transaction list is not an array"))
}

fn parse_count(json: &Value) -> Result<u64, ExplorerError> {
    match json {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(obj) => obj.get("count").and_then(Value::as_u64),
        _ => None,
    }
    .ok_or_else(|| ExplorerError::parse(format!("invalid transaction count: {json}")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::JsonMother;
    use rstest::rstest;
    use serde_json::json;

    fn base() -> Url {
        parse_base_url("http://localhost:8081/api").unwrap()
    }

    #[rstest]
    #[case::plain("ab12")]
    #[case::prefixed("0xab12")]
    #[case::padded(" 0xab12 ")]
    fn test_transaction_url_strips_prefix(#[case] hash: &str) {
        let url = transaction_url(&base(), hash).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/api/tx/ab12");
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_prefix("0x")]
    #[case::path_traversal("../status/sync")]
    fn test_transaction_url_rejects_non_hex(#[case] hash: &str) {
        assert!(matches!(
            transaction_url(&base(), hash),
            Err(ExplorerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_transactions_url() {
        let url = transactions_url(&base(), 3, 75).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/api/tx?page=3&itemsPerPage=75"
        );
    }

    #[test]
    fn test_transaction_records_shapes() {
        let array = json!([JsonMother::pay()]);
        assert_eq!(transaction_records(&array).unwrap().len(), 1);

        let wrapped = json!({"transactions": [JsonMother::pay(), JsonMother::store()]});
        assert_eq!(transaction_records(&wrapped).unwrap().len(), 2);

        let data = json!({"data": []});
        assert!(transaction_records(&data).unwrap().is_empty());

        assert!(transaction_records(&json!("nope")).is_err());
    }

    #[rstest]
    #[case::number(json!(101), 101)]
    #[case::string(json!("101"), 101)]
    #[case::object(json!({"count": 7}), 7)]
    fn test_parse_count(#[case] json: Value, #[case] expected: u64) {
        assert_eq!(parse_count(&json).unwrap(), expected);
    }

    #[test]
    fn test_parse_count_rejects_negative() {
        assert!(parse_count(&json!(-1)).is_err());
    }

    #[test]
    fn test_client_new_rejects_bad_url() {
        assert!(IndexerClient::new("not a url").is_err());
        let client = IndexerClient::new("http://localhost:8081/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8081/api/");
    }
}
