use serde::{Deserialize, Serialize};

use crate::types::{Coins, Msg};

/// Fee granted to the validator set for including a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Maximum gas units the transaction may consume.
    pub gas_limit: u64,
    /// Coins paid for that gas.
    pub amount: Coins,
}

impl Fee {
    pub fn new(gas_limit: u64, amount: impl Into<Coins>) -> Self {
        Fee { gas_limit, amount: amount.into() }
    }
}

/// Everything a [`Signer`] needs to build and sign a transaction.
///
/// The three gas fields are independent and all optional; whatever the
/// caller sets is handed to the signer verbatim. Which one wins when both
/// the explicit fee and the price pair are present is the signer's own
/// rule, not decided here.
///
/// [`Signer`]: https://docs.rs/fabrica-signers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateTxOptions {
    /// Messages to embed, in execution order.
    pub msgs: Vec<Msg>,
    /// Explicit flat fee.
    pub fee: Option<Fee>,
    /// Price per gas unit, per denomination.
    pub gas_prices: Option<Coins>,
    /// Multiplier applied to the simulated gas estimate.
    pub gas_adjustment: Option<f64>,
    /// Free-form transaction memo.
    pub memo: String,
}

/// A signed transaction as accepted by the chain's broadcast endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignedTx {
    #[serde(rename = "msg")]
    pub msgs: Vec<Msg>,
    pub fee: Fee,
    pub signatures: Vec<StdSignature>,
    #[serde(default)]
    pub memo: String,
}

/// One signature over a transaction, with the revealing public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    /// Base64 signature bytes.
    pub signature: String,
    /// Base64 compressed public key, when the signer reveals it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_key: Option<String>,
}

/// Outcome of a block-mode broadcast, returned once the transaction has
/// been included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTxResult {
    pub height: u64,
    pub txhash: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
    #[serde(default)]
    pub gas_wanted: u64,
    #[serde(default)]
    pub gas_used: u64,
}

impl BlockTxResult {
    /// Whether the included transaction failed during execution.
    pub fn is_tx_error(&self) -> bool {
        self.code != 0
    }
}

/// Outcome of a sync-mode broadcast, returned after mempool admission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTxResult {
    pub txhash: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
}

impl SyncTxResult {
    /// Whether the node rejected the transaction at check time.
    pub fn is_tx_error(&self) -> bool {
        self.code != 0
    }
}
