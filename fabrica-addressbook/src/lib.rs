#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Resolution of logical contract names to deployed addresses.
//!
//! Fabricators never hard-code addresses; they name the contract they want
//! (`"market"`, `"oracle"`, ...) and resolve it through an
//! [`AddressProvider`] at fabrication time, so the same logic runs against
//! any network. The embedded address book covers the contracts this
//! workspace ships with; tests and downstream crates can substitute a plain
//! `HashMap`.

pub use fabrica_core::types::{AccAddress, Chain};

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

const CONTRACTS_JSON: &str = include_str!("./contracts/contracts.json");

static ADDRESSBOOK: Lazy<HashMap<String, Contract>> =
    Lazy::new(|| serde_json::from_str(CONTRACTS_JSON).expect("malformed contracts.json"));

/// Read-only lookup of logical contract names to deployed addresses.
///
/// Shared by reference across every operation in a process; implementations
/// must not mutate under lookup. Unknown names resolve to `None`; there is
/// no richer failure mode at this layer.
pub trait AddressProvider: Send + Sync {
    /// Resolves a logical contract name on the active network.
    fn get(&self, name: &str) -> Option<AccAddress>;
}

/// Wrapper around a hash map that maps a [Chain] to the contract's deployed
/// address on that chain.
#[derive(Clone, Debug, Deserialize)]
pub struct Contract {
    addresses: HashMap<Chain, AccAddress>,
}

impl Contract {
    /// Returns the address of the contract on the specified chain. If the
    /// contract is not deployed there, the getter returns None.
    pub fn address(&self, chain: Chain) -> Option<AccAddress> {
        self.addresses.get(&chain).cloned()
    }
}

/// Fetch a contract's deployment table by its logical name. Names that are
/// not part of the embedded book return None.
pub fn contract<S: Into<String>>(name: S) -> Option<Contract> {
    ADDRESSBOOK.get(&name.into()).cloned()
}

/// [`AddressProvider`] view of the embedded book, pinned to one chain.
#[derive(Clone, Copy, Debug)]
pub struct AddressBook {
    chain: Chain,
}

impl AddressBook {
    pub fn new(chain: Chain) -> Self {
        AddressBook { chain }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }
}

impl AddressProvider for AddressBook {
    fn get(&self, name: &str) -> Option<AccAddress> {
        ADDRESSBOOK.get(name).and_then(|contract| contract.address(self.chain))
    }
}

// Hash maps double as ad-hoc providers in tests and tools.
impl AddressProvider for HashMap<String, AccAddress> {
    fn get(&self, name: &str) -> Option<AccAddress> {
        HashMap::get(self, name).cloned()
    }
}
