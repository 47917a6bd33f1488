#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Operation abstractions over message fabrication.
//!
//! An [`Operation`] binds three things for its whole lifetime: a
//! [`Fabricator`] (the pure two-stage function that turns typed input into
//! messages), the fabricator's address-less [`Partial`] input, and an
//! [`AddressProvider`]. From that fixed triple it derives, on demand:
//!
//! - [`Operation::generate_with_address`]: unsigned messages as if an
//!   arbitrary account were acting,
//! - [`Operation::generate_with_wallet`]: the same, for a wallet's own
//!   account,
//! - [`Operation::create_tx`]: a signed transaction,
//! - [`Operation::execute`]: a signed-and-broadcast result.
//!
//! Gas parameters pass through to the signer untouched, and collaborator
//! errors surface unchanged; this layer never retries, wraps or recovers.

mod fabricator;
pub use fabricator::{FabricateError, Fabricator, MsgPlan, Partial};

mod operation;
pub use operation::{
    create_and_sign_msg, create_native_send, send_signed_transaction, GasParameters,
    NativeSendOptions, Operation, OperationError,
};

mod wallet;
pub use wallet::Wallet;

pub use fabrica_addressbook::AddressProvider;
