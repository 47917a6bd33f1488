use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{AccAddress, Coin, Coins};

/// A single chain-state transition instruction.
///
/// Messages are plain values: fabricated fresh for every call, comparable,
/// and serializable to the chain's amino JSON form with a `type` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    /// Native-currency transfer between two accounts.
    #[serde(rename = "bank/MsgSend")]
    Send(MsgSend),

    /// Execution of a deployed contract with a JSON payload.
    #[serde(rename = "wasm/MsgExecuteContract")]
    ExecuteContract(MsgExecuteContract),
}

/// Moves coins from one account to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: AccAddress,
    pub to_address: AccAddress,
    pub amount: Vec<Coin>,
}

impl MsgSend {
    pub fn new(from_address: AccAddress, to_address: AccAddress, amount: Vec<Coin>) -> Self {
        MsgSend { from_address, to_address, amount }
    }
}

impl From<MsgSend> for Msg {
    fn from(msg: MsgSend) -> Self {
        Msg::Send(msg)
    }
}

/// Calls into a deployed contract, optionally attaching coins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgExecuteContract {
    pub sender: AccAddress,
    pub contract: AccAddress,
    /// The contract-defined execute payload, passed through as JSON.
    pub execute_msg: Value,
    #[serde(default)]
    pub coins: Coins,
}

impl MsgExecuteContract {
    pub fn new(sender: AccAddress, contract: AccAddress, execute_msg: Value) -> Self {
        MsgExecuteContract { sender, contract, execute_msg, coins: Coins::default() }
    }

    /// Attaches coins to the contract call.
    pub fn with_coins(mut self, coins: impl Into<Coins>) -> Self {
        self.coins = coins.into();
        self
    }
}

impl From<MsgExecuteContract> for Msg {
    fn from(msg: MsgExecuteContract) -> Self {
        Msg::ExecuteContract(msg)
    }
}
