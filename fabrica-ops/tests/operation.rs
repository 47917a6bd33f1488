use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use fabrica_addressbook::{AddressBook, AddressProvider, Chain};
use fabrica_core::types::{
    AccAddress, AddressError, BlockTxResult, Coin, CreateTxOptions, Fee, Msg,
    MsgExecuteContract, MsgSend, SignedTx, StdSignature, SyncTxResult,
};
use fabrica_ops::{
    create_and_sign_msg, create_native_send, send_signed_transaction, FabricateError,
    GasParameters, MsgPlan, NativeSendOptions, Operation, OperationError, Wallet,
};
use fabrica_providers::Client;
use fabrica_signers::Signer;
use serde_json::json;
use thiserror::Error;

const ACCT_1: &str = "cosmos1a5879whc9v67hggmj7gl3889g5zc3q2dwxusws";
const ACCT_2: &str = "cosmos1qwgyaft3u357ttk4dxxjgaaku0l4ytptqa0x8r";
const MARKET: &str = "cosmos17jlh83jtvdl90ap9myt37pdaly4fka2jsf4qcm";
const RECIPIENT: &str = "cosmos1vewsdxxmeraett7ztsaym88jsrv85kzm8ekjsg";

fn addr(s: &str) -> AccAddress {
    AccAddress::from_str(s).unwrap()
}

fn book() -> Arc<dyn AddressProvider> {
    let mut map = HashMap::new();
    map.insert("market".to_string(), addr(MARKET));
    Arc::new(map)
}

#[derive(Error, Debug)]
#[error("signing rejected")]
struct SignRejected;

#[derive(Clone, Debug)]
struct MockSigner {
    address: AccAddress,
    calls: Arc<Mutex<Vec<CreateTxOptions>>>,
    fail: bool,
}

impl MockSigner {
    fn new(address: &str) -> Self {
        MockSigner { address: addr(address), calls: Arc::default(), fail: false }
    }

    fn calls(&self) -> Vec<CreateTxOptions> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Signer for MockSigner {
    type Error = SignRejected;

    fn account_address(&self) -> &AccAddress {
        &self.address
    }

    async fn create_and_sign_tx(
        &self,
        options: CreateTxOptions,
    ) -> Result<SignedTx, Self::Error> {
        self.calls.lock().unwrap().push(options.clone());
        if self.fail {
            return Err(SignRejected);
        }
        Ok(SignedTx {
            msgs: options.msgs,
            fee: options.fee.unwrap_or_else(|| Fee::new(200_000, Coin::new("uatom", 5_000))),
            signatures: vec![StdSignature { signature: "c2lnbmVk".to_string(), pub_key: None }],
            memo: options.memo,
        })
    }
}

#[derive(Error, Debug)]
#[error("connection refused")]
struct BroadcastRefused;

#[derive(Clone, Debug, Default)]
struct MockClient {
    broadcasts: Arc<Mutex<Vec<SignedTx>>>,
    fail: bool,
}

impl MockClient {
    fn failing() -> Self {
        MockClient { broadcasts: Arc::default(), fail: true }
    }

    fn broadcasts(&self) -> Vec<SignedTx> {
        self.broadcasts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Client for MockClient {
    type Error = BroadcastRefused;

    async fn broadcast(&self, tx: &SignedTx) -> Result<BlockTxResult, Self::Error> {
        self.broadcasts.lock().unwrap().push(tx.clone());
        if self.fail {
            return Err(BroadcastRefused);
        }
        Ok(BlockTxResult {
            height: 42,
            txhash: "8E27".to_string(),
            code: 0,
            raw_log: String::new(),
            gas_wanted: 200_000,
            gas_used: 180_000,
        })
    }

    async fn broadcast_sync(&self, tx: &SignedTx) -> Result<SyncTxResult, Self::Error> {
        self.broadcasts.lock().unwrap().push(tx.clone());
        if self.fail {
            return Err(BroadcastRefused);
        }
        Ok(SyncTxResult { txhash: "8E27".to_string(), code: 0, raw_log: String::new() })
    }
}

#[derive(Clone, Debug)]
struct Deposit {
    sender: AccAddress,
    amount: Coin,
}

#[derive(Clone, Debug)]
struct DepositOptions {
    amount: Coin,
}

impl fabrica_ops::Partial for DepositOptions {
    type Full = Deposit;

    fn complete(&self, sender: AccAddress) -> Deposit {
        Deposit { sender, amount: self.amount.clone() }
    }
}

fn fabricate_deposit(input: Deposit) -> Result<MsgPlan, FabricateError> {
    if input.amount.amount == 0 {
        return Err(FabricateError::InvalidInput("deposit amount must be positive".to_string()));
    }
    Ok(Box::new(move |book: &dyn AddressProvider| {
        let market = book
            .get("market")
            .ok_or_else(|| FabricateError::UnknownContract("market".to_string()))?;
        Ok(vec![Msg::ExecuteContract(
            MsgExecuteContract::new(input.sender, market, json!({ "deposit": {} }))
                .with_coins(input.amount),
        )])
    }))
}

// Ignores both its input and the book: content is fixed by the fabricator.
fn fabricate_fixed(_input: Deposit) -> Result<MsgPlan, FabricateError> {
    Ok(Box::new(move |_book: &dyn AddressProvider| {
        Ok(vec![Msg::Send(MsgSend::new(
            addr(ACCT_1),
            addr(RECIPIENT),
            vec![Coin::new("uatom", 1)],
        ))])
    }))
}

fn deposit_op() -> Operation<
    fn(Deposit) -> Result<MsgPlan, FabricateError>,
    DepositOptions,
> {
    Operation::new(
        fabricate_deposit,
        DepositOptions { amount: Coin::new("uatom", 1_000_000) },
        book(),
    )
}

fn wallet() -> Wallet<MockClient, MockSigner> {
    Wallet::new(MockClient::default(), MockSigner::new(ACCT_1))
}

#[test]
fn generation_is_deterministic() {
    let op = deposit_op();
    let first = op.generate_with_address(ACCT_1).unwrap();
    let second = op.generate_with_address(ACCT_1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn wallet_and_address_views_agree() {
    let op = deposit_op();
    let wallet = wallet();
    let by_wallet = op.generate_with_wallet(&wallet).unwrap();
    let by_address = op.generate_with_address(wallet.account_address().as_str()).unwrap();
    assert_eq!(by_wallet, by_address);
}

#[test]
fn invalid_address_is_rejected_unchanged() {
    let op = deposit_op();
    let err = op.generate_with_address("notanaddress").unwrap_err();
    assert!(matches!(err, FabricateError::InvalidAddress(AddressError::InvalidBech32(_))));
}

#[test]
fn fixed_fabricator_output_is_address_independent() {
    let op = Operation::new(
        fabricate_fixed as fn(Deposit) -> Result<MsgPlan, FabricateError>,
        DepositOptions { amount: Coin::new("uatom", 1) },
        book(),
    );
    let one = op.generate_with_address(ACCT_1).unwrap();
    let two = op.generate_with_address(ACCT_2).unwrap();
    assert_eq!(one, two);
}

#[tokio::test]
async fn create_tx_embeds_generated_messages() {
    let op = deposit_op();
    let wallet = wallet();
    let tx = op.create_tx(&wallet, GasParameters::default()).await.unwrap();
    assert_eq!(tx.msgs, op.generate_with_wallet(&wallet).unwrap());
}

#[tokio::test]
async fn gas_parameters_forward_verbatim() {
    let op = deposit_op();
    let signer = MockSigner::new(ACCT_1);
    let wallet = Wallet::new(MockClient::default(), signer.clone());

    let fee = Fee::new(250_000, Coin::new("uatom", 6_000));
    op.create_tx(&wallet, GasParameters { fee: Some(fee.clone()), ..Default::default() })
        .await
        .unwrap();

    let prices: fabrica_core::types::Coins = "25uatom".parse().unwrap();
    op.create_tx(
        &wallet,
        GasParameters {
            fee: None,
            gas_prices: Some(prices.clone()),
            gas_adjustment: Some(1.4),
        },
    )
    .await
    .unwrap();

    let calls = signer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].fee, Some(fee));
    assert_eq!(calls[0].gas_prices, None);
    assert_eq!(calls[0].gas_adjustment, None);
    assert_eq!(calls[1].fee, None);
    assert_eq!(calls[1].gas_prices, Some(prices));
    assert_eq!(calls[1].gas_adjustment, Some(1.4));
}

#[tokio::test]
async fn execute_signs_then_broadcasts() {
    let op = deposit_op();
    let signer = MockSigner::new(ACCT_1);
    let client = MockClient::default();
    let wallet = Wallet::new(client.clone(), signer.clone());

    let result = op.execute(&wallet, GasParameters::default()).await.unwrap();
    assert_eq!(result.height, 42);
    assert!(!result.is_tx_error());

    let broadcasts = client.broadcasts();
    assert_eq!(signer.calls().len(), 1);
    assert_eq!(broadcasts.len(), 1);
    assert_eq!(broadcasts[0].msgs, op.generate_with_wallet(&wallet).unwrap());
}

#[tokio::test]
async fn fabrication_failure_precedes_signing() {
    let op = Operation::new(
        fabricate_deposit as fn(Deposit) -> Result<MsgPlan, FabricateError>,
        DepositOptions { amount: Coin::new("uatom", 0) },
        book(),
    );
    let signer = MockSigner::new(ACCT_1);
    let client = MockClient::default();
    let wallet = Wallet::new(client.clone(), signer.clone());

    let err = op.execute(&wallet, GasParameters::default()).await.unwrap_err();
    assert!(matches!(err, OperationError::Fabricate(FabricateError::InvalidInput(_))));
    assert!(signer.calls().is_empty());
    assert!(client.broadcasts().is_empty());
}

#[tokio::test]
async fn broadcast_failure_surfaces_after_signing() {
    let op = deposit_op();
    let signer = MockSigner::new(ACCT_1);
    let client = MockClient::failing();
    let wallet = Wallet::new(client.clone(), signer.clone());

    let err = op.execute(&wallet, GasParameters::default()).await.unwrap_err();
    assert!(matches!(err, OperationError::Client(_)));
    assert_eq!(signer.calls().len(), 1);
    assert_eq!(client.broadcasts().len(), 1);
}

#[tokio::test]
async fn signing_failure_surfaces_unchanged() {
    let op = deposit_op();
    let mut signer = MockSigner::new(ACCT_1);
    signer.fail = true;
    let client = MockClient::default();
    let wallet = Wallet::new(client.clone(), signer);

    let err = op.execute(&wallet, GasParameters::default()).await.unwrap_err();
    assert!(matches!(err, OperationError::Signer(_)));
    assert!(client.broadcasts().is_empty());
}

#[test]
fn native_send_validates_recipient_first() {
    let msg = create_native_send(
        addr(ACCT_1),
        NativeSendOptions { recipient: RECIPIENT.to_string(), coin: Coin::new("uatom", 77) },
    )
    .unwrap();
    assert_eq!(
        msg,
        Msg::Send(MsgSend::new(addr(ACCT_1), addr(RECIPIENT), vec![Coin::new("uatom", 77)]))
    );

    let err = create_native_send(
        addr(ACCT_1),
        NativeSendOptions { recipient: "cosmos1bogus".to_string(), coin: Coin::new("uatom", 77) },
    )
    .unwrap_err();
    assert!(matches!(err, AddressError::InvalidBech32(_)));
}

#[tokio::test]
async fn sign_msg_helper_bypasses_fabrication() {
    let signer = MockSigner::new(ACCT_1);
    let wallet = Wallet::new(MockClient::default(), signer.clone());
    let msgs =
        vec![Msg::Send(MsgSend::new(addr(ACCT_1), addr(RECIPIENT), vec![Coin::new("uatom", 9)]))];

    let tx = create_and_sign_msg(&wallet, GasParameters::default(), msgs.clone()).await.unwrap();
    assert_eq!(tx.msgs, msgs);
    assert_eq!(signer.calls()[0].msgs, msgs);
}

#[tokio::test]
async fn send_signed_transaction_uses_sync_mode() {
    let signer = MockSigner::new(ACCT_1);
    let client = MockClient::default();
    let wallet = Wallet::new(client.clone(), signer);

    let tx = create_and_sign_msg(&wallet, GasParameters::default(), vec![]).await.unwrap();
    let result = send_signed_transaction(wallet.client(), &tx).await.unwrap();
    assert!(!result.is_tx_error());
    assert_eq!(client.broadcasts().len(), 1);
}

#[test]
fn embedded_addressbook_resolves_per_chain() {
    let op = Operation::new(
        fabricate_deposit as fn(Deposit) -> Result<MsgPlan, FabricateError>,
        DepositOptions { amount: Coin::new("uatom", 5) },
        Arc::new(AddressBook::new(Chain::Mainnet)),
    );
    let msgs = op.generate_with_address(ACCT_1).unwrap();
    match &msgs[0] {
        Msg::ExecuteContract(msg) => assert_eq!(msg.contract.as_str(), MARKET),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn with_signer_rebinds_the_cached_address() {
    let wallet = wallet();
    assert_eq!(wallet.account_address(), &addr(ACCT_1));
    let rebound = wallet.with_signer(MockSigner::new(ACCT_2));
    assert_eq!(rebound.account_address(), &addr(ACCT_2));
}
