#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Clients for submitting signed transactions to chain nodes.
//!
//! The [`Client`] trait is the whole surface the operation layer needs:
//! block-mode broadcast for fire-and-confirm flows and sync-mode broadcast
//! for direct submission of pre-signed transactions. [`Http`] implements it
//! over a node's REST endpoint.

use async_trait::async_trait;
use fabrica_core::types::{BlockTxResult, SignedTx, SyncTxResult};
use std::error::Error;

mod http;
pub use http::{Http, HttpClientError};

/// Trait for submitting signed transactions.
///
/// Implementations carry no retry or timeout policy of their own; a failed
/// submission surfaces through the associated `Error` unchanged, and the
/// caller decides what to do next.
#[async_trait]
pub trait Client: std::fmt::Debug + Send + Sync {
    type Error: Error + Send + Sync;

    /// Submits a signed transaction and waits for it to be included in a
    /// block.
    async fn broadcast(&self, tx: &SignedTx) -> Result<BlockTxResult, Self::Error>;

    /// Submits a signed transaction and returns as soon as the node has
    /// admitted it to its mempool.
    async fn broadcast_sync(&self, tx: &SignedTx) -> Result<SyncTxResult, Self::Error>;
}
