use std::fmt;

use serde::{Deserialize, Serialize};

/// Networks the fabrica crates know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Mainnet,
    Testnet,
    Dev,
}

impl Chain {
    /// The chain id carried in signed transactions for this network.
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Mainnet => "cosmoshub-4",
            Chain::Testnet => "theta-testnet-001",
            Chain::Dev => "localnet",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}
