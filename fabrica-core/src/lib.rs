#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Chain data types for the fabrica crates.
//!
//! Everything here is a plain value type: validated bech32 account
//! addresses, coin amounts, the closed set of chain messages, fees, signed
//! transactions and broadcast results. None of it touches the network or
//! holds keys; those concerns live in `fabrica-providers` and
//! `fabrica-signers`.

pub mod types;
