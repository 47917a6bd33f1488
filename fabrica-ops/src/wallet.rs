use fabrica_core::types::{AccAddress, CreateTxOptions, SignedTx};
use fabrica_providers::Client;
use fabrica_signers::Signer;

/// A signing account bound to the client it broadcasts through, compatible
/// with any implementer of the [`Signer`] trait.
///
/// [`Signer`]: fabrica_signers::Signer
#[derive(Clone, Debug)]
pub struct Wallet<C, S> {
    pub(crate) client: C,
    pub(crate) signer: S,
    pub(crate) address: AccAddress,
}

impl<C, S> Wallet<C, S>
where
    C: Client,
    S: Signer,
{
    /// Creates a new wallet from the client and signer.
    /// The wallet's address is cached from the signer.
    pub fn new(client: C, signer: S) -> Self {
        let address = signer.account_address().clone();
        Wallet { client, signer, address }
    }

    /// The wallet's own account address.
    pub fn account_address(&self) -> &AccAddress {
        &self.address
    }

    /// The client transactions are broadcast through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// A reference to the wallet's signer.
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Builds a wallet over the same client with another signer.
    #[must_use]
    pub fn with_signer(&self, signer: S) -> Self
    where
        C: Clone,
        S: Clone,
    {
        let mut this = self.clone();
        this.address = signer.account_address().clone();
        this.signer = signer;
        this
    }

    /// Builds and signs a transaction over `options.msgs`, delegating fee
    /// settlement and sequence assignment to the signer.
    pub async fn create_and_sign_tx(
        &self,
        options: CreateTxOptions,
    ) -> Result<SignedTx, S::Error> {
        self.signer.create_and_sign_tx(options).await
    }
}
