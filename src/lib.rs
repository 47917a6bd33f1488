#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fabrica
//!
//! Transaction fabrication and wallet plumbing for Cosmos-style chains.
//!
//! An [`Operation`](ops::Operation) binds a message-fabrication function to
//! its address-less input and an address book, and exposes four views over
//! that fixed triple: unsigned messages for an arbitrary account, unsigned
//! messages for a wallet's own account, a signed transaction, and a
//! signed-and-broadcast result. Signing and submission stay behind the
//! [`Signer`](signers::Signer) and [`Client`](providers::Client) traits.
//!
//! This crate only re-exports the workspace members under short names; the
//! individual crates can be used on their own.

pub use fabrica_addressbook as addressbook;
pub use fabrica_core as core;
pub use fabrica_ops as ops;
pub use fabrica_providers as providers;
pub use fabrica_signers as signers;

/// Easy imports of the most common types and traits.
pub mod prelude {
    pub use super::{
        addressbook::{contract, AddressBook, AddressProvider},
        core::types::*,
        ops::*,
        providers::{Client, Http},
        signers::Signer,
    };
}
