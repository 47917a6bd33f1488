use std::{fmt, str::FromStr, sync::Arc};

use fabrica_addressbook::AddressProvider;
use fabrica_core::types::{
    AccAddress, AddressError, BlockTxResult, Coin, Coins, CreateTxOptions, Fee, Msg, MsgSend,
    SignedTx, SyncTxResult,
};
use fabrica_providers::Client;
use fabrica_signers::Signer;
use thiserror::Error;
use tracing::debug;

use crate::{FabricateError, Fabricator, Partial, Wallet};

/// Caller-chosen gas specification, forwarded to the signer untouched.
///
/// Either pin an explicit `fee`, or supply `gas_prices` together with a
/// simulation `gas_adjustment`, or leave everything unset and take the
/// signer's defaults. The fields are independent and nothing here validates
/// their combination; when both forms are present the signer's own
/// precedence rule applies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GasParameters {
    pub fee: Option<Fee>,
    pub gas_prices: Option<Coins>,
    pub gas_adjustment: Option<f64>,
}

#[derive(Error, Debug)]
/// Error raised by the transaction-building operation views
pub enum OperationError<C: Client, S: Signer> {
    /// Thrown when the wallet's signer rejects the sign request
    #[error("{0}")]
    Signer(S::Error),

    /// Thrown when the client fails to submit the signed transaction
    #[error("{0}")]
    Client(C::Error),

    /// Thrown when message fabrication fails, before signing is attempted
    #[error(transparent)]
    Fabricate(#[from] FabricateError),
}

/// One reusable unit of chain interaction: a fabricator bound to its
/// address-less input and an address book.
///
/// The triple is fixed at construction and every view is a pure function of
/// it plus the per-call account or wallet. Nothing is cached between calls,
/// messages are fabricated fresh each time, and no view mutates the
/// operation, so concurrent calls on one instance are safe.
///
/// # Example
///
/// ```
/// use std::{collections::HashMap, str::FromStr, sync::Arc};
///
/// use fabrica_core::types::{AccAddress, Coin, Msg, MsgSend};
/// use fabrica_ops::{AddressProvider, FabricateError, MsgPlan, Operation, Partial};
///
/// struct Payout {
///     sender: AccAddress,
///     amount: Coin,
/// }
///
/// struct PayoutOptions {
///     amount: Coin,
/// }
///
/// impl Partial for PayoutOptions {
///     type Full = Payout;
///
///     fn complete(&self, sender: AccAddress) -> Payout {
///         Payout { sender, amount: self.amount.clone() }
///     }
/// }
///
/// fn fabricate_payout(input: Payout) -> Result<MsgPlan, FabricateError> {
///     Ok(Box::new(move |book: &dyn AddressProvider| {
///         let treasury = book
///             .get("treasury")
///             .ok_or_else(|| FabricateError::UnknownContract("treasury".into()))?;
///         Ok(vec![Msg::Send(MsgSend::new(input.sender, treasury, vec![input.amount]))])
///     }))
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut book = HashMap::new();
/// book.insert(
///     "treasury".to_string(),
///     AccAddress::from_str("cosmos1e2azf0dx8z7wfhyg6r24tr8yfae8gcuy0xkmc8")?,
/// );
///
/// let op = Operation::new(
///     fabricate_payout,
///     PayoutOptions { amount: Coin::new("uatom", 2_500_000) },
///     Arc::new(book),
/// );
///
/// let msgs = op.generate_with_address("cosmos1a5879whc9v67hggmj7gl3889g5zc3q2dwxusws")?;
/// assert_eq!(msgs.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Operation<F, P> {
    fabricator: F,
    partial: P,
    book: Arc<dyn AddressProvider>,
}

impl<F, P> Operation<F, P>
where
    P: Partial,
    F: Fabricator<P::Full>,
{
    /// Binds the fabricator, its address-less input and an address book.
    pub fn new(fabricator: F, partial: P, book: Arc<dyn AddressProvider>) -> Self {
        Operation { fabricator, partial, book }
    }

    fn generate(&self, sender: AccAddress) -> Result<Vec<Msg>, FabricateError> {
        let plan = self.fabricator.fabricate(self.partial.complete(sender))?;
        plan(self.book.as_ref())
    }

    /// Fabricates the message sequence as if `address` were the acting
    /// account. The address is validated first; no signing is involved.
    pub fn generate_with_address(&self, address: &str) -> Result<Vec<Msg>, FabricateError> {
        let sender = AccAddress::from_str(address)?;
        self.generate(sender)
    }

    /// Fabricates the message sequence for the wallet's own account:
    /// exactly [`generate_with_address`] applied to it.
    ///
    /// [`generate_with_address`]: Operation::generate_with_address
    pub fn generate_with_wallet<C, S>(
        &self,
        wallet: &Wallet<C, S>,
    ) -> Result<Vec<Msg>, FabricateError>
    where
        C: Client,
        S: Signer,
    {
        self.generate(wallet.account_address().clone())
    }

    /// Builds and signs a transaction carrying this operation's messages
    /// for the wallet's account. Gas parameters pass through to the signer
    /// verbatim.
    pub async fn create_tx<C, S>(
        &self,
        wallet: &Wallet<C, S>,
        gas: GasParameters,
    ) -> Result<SignedTx, OperationError<C, S>>
    where
        C: Client,
        S: Signer,
    {
        let msgs = self.generate(wallet.account_address().clone())?;
        debug!(msgs = msgs.len(), "signing fabricated messages");
        wallet
            .create_and_sign_tx(CreateTxOptions {
                msgs,
                fee: gas.fee,
                gas_prices: gas.gas_prices,
                gas_adjustment: gas.gas_adjustment,
                memo: String::new(),
            })
            .await
            .map_err(OperationError::Signer)
    }

    /// Signs as in [`create_tx`], then broadcasts through the wallet's
    /// client and waits for inclusion.
    ///
    /// The two steps are sequential, not atomic: if broadcasting fails the
    /// signed transaction is discarded and the broadcast error surfaces
    /// unchanged. Nothing is retried at this layer.
    ///
    /// [`create_tx`]: Operation::create_tx
    pub async fn execute<C, S>(
        &self,
        wallet: &Wallet<C, S>,
        gas: GasParameters,
    ) -> Result<BlockTxResult, OperationError<C, S>>
    where
        C: Client,
        S: Signer,
    {
        let tx = self.create_tx(wallet, gas).await?;
        wallet.client().broadcast(&tx).await.map_err(OperationError::Client)
    }
}

// The fabricator and book carry no useful state to print.
impl<F, P: fmt::Debug> fmt::Debug for Operation<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation").field("partial", &self.partial).finish_non_exhaustive()
    }
}

/// Options for [`create_native_send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeSendOptions {
    /// Receiving account, validated before any message is constructed.
    pub recipient: String,
    /// The single coin amount to move.
    pub coin: Coin,
}

/// Constructs a native-currency transfer from `sender` to the validated
/// recipient. Pure and synchronous; fails before building anything if the
/// recipient does not parse.
pub fn create_native_send(
    sender: AccAddress,
    options: NativeSendOptions,
) -> Result<Msg, AddressError> {
    let recipient = AccAddress::from_str(&options.recipient)?;
    Ok(Msg::Send(MsgSend::new(sender, recipient, vec![options.coin])))
}

/// Signs a caller-supplied message list directly, bypassing fabrication:
/// the escape hatch for pre-built message sequences.
pub async fn create_and_sign_msg<C, S>(
    wallet: &Wallet<C, S>,
    gas: GasParameters,
    msgs: Vec<Msg>,
) -> Result<SignedTx, S::Error>
where
    C: Client,
    S: Signer,
{
    wallet
        .create_and_sign_tx(CreateTxOptions {
            msgs,
            fee: gas.fee,
            gas_prices: gas.gas_prices,
            gas_adjustment: gas.gas_adjustment,
            memo: String::new(),
        })
        .await
}

/// Submits a pre-signed transaction in sync mode, with no further
/// processing.
pub async fn send_signed_transaction<C>(
    client: &C,
    tx: &SignedTx,
) -> Result<SyncTxResult, C::Error>
where
    C: Client,
{
    client.broadcast_sync(tx).await
}
