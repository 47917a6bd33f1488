#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Provides a unified interface for building and signing transactions.
//!
//! Implement the [`Signer`] trait to plug in custody backends: local keys,
//! Hardware Security Modules, remote signing services. Key material,
//! account numbers and sequence assignment all live behind the trait;
//! callers hand over messages and gas parameters and receive a transaction
//! ready for broadcast.

use async_trait::async_trait;
use fabrica_core::types::{AccAddress, CreateTxOptions, SignedTx};
use std::error::Error;

/// Trait for building and signing transactions.
///
/// A signer owns exactly one account. It packs `options.msgs` into a
/// transaction shell, settles the fee from whichever gas fields the caller
/// supplied (its own precedence rule applies when both the explicit fee and
/// the price pair are present), assigns the account's current sequence and
/// signs the result. Failures surface through the associated `Error`
/// unchanged; nothing at this layer retries.
#[async_trait]
pub trait Signer: std::fmt::Debug + Send + Sync {
    type Error: Error + Send + Sync;

    /// The signer's own account address.
    fn account_address(&self) -> &AccAddress;

    /// Builds and signs a transaction over `options.msgs`.
    async fn create_and_sign_tx(
        &self,
        options: CreateTxOptions,
    ) -> Result<SignedTx, Self::Error>;
}
