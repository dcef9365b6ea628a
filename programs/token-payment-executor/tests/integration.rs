//! Integration tests for the Token Payment Executor program and its nested
//! call into the Executor.

use executor::{Executor, ExecutorError, RequestForExecution, RequestForExecutionArgs};
use executor_avm::{
    application_address, execute, Address, AppId, Applications, AssetId, AssetTransferTxn,
    Effects, Env, ErrorCategory, Event, InnerTxn, PaymentTxn,
};
use executor_requests::{
    bytes32_from_u64, make_signed_quote, QuoteError, QUOTE_PREFIX_EQ01, QUOTE_PREFIX_EQC1,
};
use token_payment_executor::{
    PaymentInToken, TokenPaymentExecutor, TokenPaymentExecutorApp, TokenPaymentExecutorError,
};

const EXECUTOR_APP: AppId = AppId(1001);
const TOKEN_EXECUTOR_APP: AppId = AppId(1002);
const OUR_CHAIN: u16 = 8;
const DST_CHAIN: u16 = 5;
const NOW: u64 = 1_750_000_000;
const FEE_ASSET: AssetId = AssetId(31_566_704);

const USER: Address = Address([0x55; 32]);
const QUOTER: [u8; 20] = [0x11; 20];
const PAYEE: [u8; 32] = [0x22; 32];

type Program = TokenPaymentExecutor<Executor, Applications>;

fn setup() -> Program {
    let mut apps = Applications::new();
    apps.create(EXECUTOR_APP);
    apps.create(TOKEN_EXECUTOR_APP);
    TokenPaymentExecutor::create(
        TOKEN_EXECUTOR_APP,
        Executor::create(EXECUTOR_APP, OUR_CHAIN),
        apps,
    )
}

/// Build a quote paying in `token` with a fake body and signature
fn build_quote(prefix: &[u8; 4], token: [u8; 32], expiry_time: u64) -> Vec<u8> {
    let mut body = vec![0u8; 32];
    body.extend_from_slice(&token);
    body.extend_from_slice(&[0xEE; 65]);
    make_signed_quote(prefix, &QUOTER, &PAYEE, OUR_CHAIN, DST_CHAIN, expiry_time, &body)
}

fn build_args(signed_quote_bytes: Vec<u8>) -> RequestForExecutionArgs {
    RequestForExecutionArgs {
        dst_chain: DST_CHAIN,
        dst_addr: [0x33; 32],
        refund_addr: Address([0x44; 32]),
        signed_quote_bytes,
        request_bytes: vec![0x45, 0x52, 0x56, 0x31],
        relay_instructions: vec![],
    }
}

fn fee_payment(amount: u64) -> AssetTransferTxn {
    AssetTransferTxn {
        sender: USER,
        asset_receiver: application_address(TOKEN_EXECUTOR_APP),
        xfer_asset: FEE_ASSET,
        asset_amount: amount,
    }
}

fn request(
    program: &Program,
    payment: &AssetTransferTxn,
    args: &RequestForExecutionArgs,
) -> Result<Effects, TokenPaymentExecutorError> {
    let env = Env {
        app_id: TOKEN_EXECUTOR_APP,
        sender: USER,
        latest_timestamp: NOW,
    };
    execute(env, |ctx| {
        program.request_execution_with_token_payment(ctx, payment, args)
    })
    .map(|((), effects)| effects)
}

#[test]
fn test_request_execution_with_token_payment_succeeds() {
    let program = setup();
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60));

    let effects = request(&program, &fee_payment(500), &args).unwrap();

    let token_executor_address = application_address(TOKEN_EXECUTOR_APP);
    let executor_address = application_address(EXECUTOR_APP);
    assert_eq!(
        effects.inner_txns,
        [
            InnerTxn::AssetTransfer(AssetTransferTxn {
                sender: token_executor_address,
                asset_receiver: Address(PAYEE),
                xfer_asset: FEE_ASSET,
                asset_amount: 500,
            }),
            InnerTxn::Payment(PaymentTxn {
                sender: token_executor_address,
                receiver: executor_address,
                amount: 0,
            }),
            InnerTxn::ApplicationCall {
                sender: token_executor_address,
                app_id: EXECUTOR_APP,
                selector: Executor::selector(),
            },
            InnerTxn::Payment(PaymentTxn {
                sender: executor_address,
                receiver: Address(PAYEE),
                amount: 0,
            }),
        ]
    );

    let payment_log = PaymentInToken {
        asset_id: FEE_ASSET.0,
        amt_paid: 500,
    }
    .to_log()
    .unwrap();
    assert_eq!(
        effects.logs_of(TOKEN_EXECUTOR_APP).collect::<Vec<_>>(),
        [payment_log.as_slice()]
    );

    let request_log = RequestForExecution {
        quoter_address: QUOTER,
        amt_paid: 0,
        dst_chain: DST_CHAIN,
        dst_addr: args.dst_addr,
        refund_addr: args.refund_addr,
        signed_quote_bytes: args.signed_quote_bytes.clone(),
        request_bytes: args.request_bytes.clone(),
        relay_instructions: args.relay_instructions.clone(),
    }
    .to_log()
    .unwrap();
    assert_eq!(
        effects.logs_of(EXECUTOR_APP).collect::<Vec<_>>(),
        [request_log.as_slice()]
    );
}

#[test]
fn test_fails_when_prefix_is_not_token_quote() {
    let program = setup();
    let args = build_args(build_quote(QUOTE_PREFIX_EQ01, bytes32_from_u64(FEE_ASSET.0), NOW + 60));

    let err = request(&program, &fee_payment(500), &args).unwrap_err();
    assert_eq!(err.to_string(), "Prefix mismatch");
}

#[test]
fn test_fails_when_token_address_is_not_an_asset_id() {
    let program = setup();
    let mut token = bytes32_from_u64(FEE_ASSET.0);
    token[0] = 1;
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, token, NOW + 60));

    let err = request(&program, &fee_payment(500), &args).unwrap_err();
    assert_eq!(
        err,
        TokenPaymentExecutorError::Quote(QuoteError::UnsafeTokenConversion)
    );
    assert_eq!(err.to_string(), "Unsafe conversion of bytes32 to uint64");
}

#[test]
fn test_fails_when_quote_too_short_for_token() {
    let program = setup();
    let mut quote = build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60);
    quote.truncate(120);

    let err = request(&program, &fee_payment(500), &build_args(quote)).unwrap_err();
    assert_eq!(err, TokenPaymentExecutorError::Quote(QuoteError::InvalidLength));
}

#[test]
fn test_fails_when_fee_sender_is_different() {
    let program = setup();
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60));
    let payment = AssetTransferTxn {
        sender: Address([0x99; 32]),
        ..fee_payment(500)
    };

    let err = request(&program, &payment, &args).unwrap_err();
    assert_eq!(err.to_string(), "Fee txn must be from same sender");
    assert_eq!(err.category(), ErrorCategory::Authorization);
}

#[test]
fn test_fails_when_fee_receiver_is_different() {
    let program = setup();
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60));
    let payment = AssetTransferTxn {
        asset_receiver: application_address(EXECUTOR_APP),
        ..fee_payment(500)
    };

    let err = request(&program, &payment, &args).unwrap_err();
    assert_eq!(err.to_string(), "Unknown fee payment receiver");
}

#[test]
fn test_fails_when_fee_asset_is_different() {
    let program = setup();
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60));
    let payment = AssetTransferTxn {
        xfer_asset: AssetId(FEE_ASSET.0 + 1),
        ..fee_payment(500)
    };

    let err = request(&program, &payment, &args).unwrap_err();
    assert_eq!(err, TokenPaymentExecutorError::UnknownAsset);
    assert_eq!(err.to_string(), "Unknown asset id");
}

#[test]
fn test_fails_when_executor_does_not_exist() {
    let program = TokenPaymentExecutor::create(
        TOKEN_EXECUTOR_APP,
        Executor::create(EXECUTOR_APP, OUR_CHAIN),
        Applications::new(),
    );
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW + 60));

    let err = request(&program, &fee_payment(500), &args).unwrap_err();
    assert_eq!(err.to_string(), "Executor address unknown");
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn test_executor_rejection_aborts_the_group() {
    let program = setup();
    // expired: the token transfer and event are already buffered when the
    // nested call fails
    let args = build_args(build_quote(QUOTE_PREFIX_EQC1, bytes32_from_u64(FEE_ASSET.0), NOW));

    let err = request(&program, &fee_payment(500), &args).unwrap_err();
    assert_eq!(
        err,
        TokenPaymentExecutorError::Executor(ExecutorError::Quote(QuoteError::Expired))
    );
    assert_eq!(err.to_string(), "Quote expired");
    assert_eq!(err.category(), ErrorCategory::Validation);
}
