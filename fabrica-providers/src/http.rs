use crate::Client;

use async_trait::async_trait;
use fabrica_core::types::{BlockTxResult, SignedTx, SyncTxResult};
use reqwest::{Client as ReqwestClient, Error as ReqwestError};
use serde::{de::DeserializeOwned, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// A transaction-submission client over a chain node's REST endpoint.
///
/// # Example
///
/// ```no_run
/// use fabrica_providers::{Client, Http};
/// use std::str::FromStr;
///
/// # async fn foo(tx: fabrica_core::types::SignedTx) -> Result<(), Box<dyn std::error::Error>> {
/// let client = Http::from_str("http://localhost:1317")?;
/// let result = client.broadcast_sync(&tx).await?;
/// println!("admitted: {}", result.txhash);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Http {
    client: ReqwestClient,
    url: Url,
}

#[derive(Error, Debug)]
/// Error thrown when submitting a transaction over HTTP
pub enum HttpClientError {
    /// Thrown if the request failed
    #[error(transparent)]
    ReqwestError(#[from] ReqwestError),

    /// Thrown if the broadcast path could not be joined onto the base url
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}

impl Http {
    /// Initializes a new HTTP client against a node's REST base url.
    pub fn new(url: impl Into<Url>) -> Self {
        Self { client: ReqwestClient::new(), url: url.into() }
    }

    /// The base url requests are issued against.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn broadcast_mode<R: DeserializeOwned>(
        &self,
        tx: &SignedTx,
        mode: &str,
    ) -> Result<R, HttpClientError> {
        #[derive(Serialize)]
        struct BroadcastBody<'a> {
            tx: &'a SignedTx,
            mode: &'a str,
        }

        let url = self.url.join("txs")?;
        let res = self
            .client
            .post(url)
            .json(&BroadcastBody { tx, mode })
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json::<R>().await?)
    }
}

#[async_trait]
impl Client for Http {
    type Error = HttpClientError;

    async fn broadcast(&self, tx: &SignedTx) -> Result<BlockTxResult, HttpClientError> {
        let result: BlockTxResult = self.broadcast_mode(tx, "block").await?;
        debug!(txhash = %result.txhash, height = result.height, "transaction included");
        Ok(result)
    }

    async fn broadcast_sync(&self, tx: &SignedTx) -> Result<SyncTxResult, HttpClientError> {
        let result: SyncTxResult = self.broadcast_mode(tx, "sync").await?;
        debug!(txhash = %result.txhash, "transaction admitted");
        Ok(result)
    }
}

impl FromStr for Http {
    type Err = url::ParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(src)?;
        Ok(Http::new(url))
    }
}
