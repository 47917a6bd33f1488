use fabrica_addressbook::AddressProvider;
use fabrica_core::types::{AccAddress, AddressError, Msg};
use thiserror::Error;

#[derive(Error, Debug)]
/// Error produced while fabricating messages
pub enum FabricateError {
    /// An acting or embedded account identifier failed validation
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// A logical contract name the fabricator relies on is not deployed on
    /// the active chain
    #[error("unknown contract {0:?}")]
    UnknownContract(String),

    /// Domain-specific validation of the fabricator's typed input
    #[error("invalid fabricator input: {0}")]
    InvalidInput(String),
}

/// Second fabrication stage: a deferred message assembly awaiting an
/// [`AddressProvider`].
///
/// Splitting the stages keeps address lookups out of input validation; a
/// plan can be built and inspected before any book is consulted.
pub type MsgPlan = Box<dyn FnOnce(&dyn AddressProvider) -> Result<Vec<Msg>, FabricateError> + Send>;

/// Two-stage message fabrication.
///
/// Stage one consumes the full typed input, acting account included, and
/// may reject it; stage two, the returned [`MsgPlan`], resolves logical
/// contract names and materializes the message sequence. Fabricators hold
/// no state: the same value is safe to share across operations and calls,
/// and equal inputs must always produce the same messages.
pub trait Fabricator<I>: Send + Sync {
    fn fabricate(&self, input: I) -> Result<MsgPlan, FabricateError>;
}

// Any compatible function is a fabricator; most are written as plain `fn`
// items.
impl<I, F> Fabricator<I> for F
where
    F: Fn(I) -> Result<MsgPlan, FabricateError> + Send + Sync,
{
    fn fabricate(&self, input: I) -> Result<MsgPlan, FabricateError> {
        self(input)
    }
}

/// The address-less form of a fabricator input.
///
/// An operation stores one of these for its whole lifetime and completes it
/// with the acting account at each call. The merge is an explicit
/// constructor: each input type states exactly how its sender slots into
/// the full record.
pub trait Partial {
    /// The completed input, acting account included.
    type Full;

    fn complete(&self, sender: AccAddress) -> Self::Full;
}
