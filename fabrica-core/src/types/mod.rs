mod address;
pub use address::{AccAddress, AddressError, ACCOUNT_PREFIX};

mod chain;
pub use chain::Chain;

mod coin;
pub use coin::{Coin, CoinError, Coins};

mod msg;
pub use msg::{Msg, MsgExecuteContract, MsgSend};

mod tx;
pub use tx::{
    BlockTxResult, CreateTxOptions, Fee, SignedTx, StdSignature, SyncTxResult,
};
