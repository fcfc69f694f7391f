use savings_fund::events::SavingRetiredEvent;
use savings_fund::{SavingsError, SavingsFundContract, SavingsFundContractClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, token, vec, Address, Env, IntoVal};

const TOKEN_UNIT: i128 = 10_000_000;
const THIRTY_DAYS: u64 = 86_400 * 30;

struct TestCtx<'a> {
    admin: Address,
    token: token::Client<'a>,
    mint: token::StellarAssetClient<'a>,
    client: SavingsFundContractClient<'a>,
}

fn setup<'a>(env: &Env) -> TestCtx<'a> {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let token_admin = Address::generate(env);
    let token_address = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let contract_id = env.register(SavingsFundContract, ());
    let client = SavingsFundContractClient::new(env, &contract_id);
    client.initialize(&admin, &token_address, &20, &5, &60, &(1000 * TOKEN_UNIT));
    TestCtx {
        admin,
        token: token::Client::new(env, &token_address),
        mint: token::StellarAssetClient::new(env, &token_address),
        client,
    }
}

fn advance_time(env: &Env, delta: u64) {
    let now = env.ledger().timestamp();
    env.ledger().with_mut(|ledger| {
        ledger.timestamp = now + delta;
    });
}

fn fund_incentives(ctx: &TestCtx) {
    let outstanding = ctx.client.get_total_incentives_to_pay();
    ctx.mint.mint(&ctx.admin, &outstanding);
    ctx.client.add_incentives(&ctx.admin, &outstanding);
}

#[test]
fn test_withdrawal_fails_while_employed() {
    let env = Env::default();
    let ctx = setup(&env);
    let employee = Address::generate(&env);

    ctx.client.set_employee(&ctx.admin, &employee);
    ctx.mint.mint(&employee, &(50 * TOKEN_UNIT));
    ctx.client
        .add_savings(&employee, &employee, &(50 * TOKEN_UNIT));

    assert_eq!(
        ctx.client.try_withdraw_saving(&employee),
        Err(Ok(SavingsError::IsStillEmployed))
    );
}

#[test]
fn test_withdrawal_fails_with_unfunded_incentives() {
    let env = Env::default();
    let ctx = setup(&env);
    let employee = Address::generate(&env);

    ctx.client.set_employee(&ctx.admin, &employee);
    ctx.mint.mint(&employee, &(50 * TOKEN_UNIT));
    ctx.client
        .add_savings(&employee, &employee, &(50 * TOKEN_UNIT));
    ctx.client.remove_employee(&ctx.admin, &employee);

    assert_eq!(
        ctx.client.try_withdraw_saving(&employee),
        Err(Ok(SavingsError::IncentivesAreNotPayYet))
    );
}

#[test]
fn test_withdrawal_fails_when_debt_exceeds_savings() {
    let env = Env::default();
    let ctx = setup(&env);
    let employee = Address::generate(&env);

    ctx.client.set_employee(&ctx.admin, &employee);
    ctx.mint.mint(&employee, &(50 * TOKEN_UNIT));
    ctx.client
        .add_savings(&employee, &employee, &(50 * TOKEN_UNIT));
    ctx.client.get_credit(&employee, &(25 * TOKEN_UNIT));
    fund_incentives(&ctx);
    ctx.client.remove_employee(&ctx.admin, &employee);

    // enough elapsed time makes interest alone outgrow the savings
    advance_time(&env, 86_400 * 300_000);

    assert_eq!(
        ctx.client.try_withdraw_saving(&employee),
        Err(Ok(SavingsError::CreditTooLarge))
    );
}

#[test]
fn test_withdrawal_with_pending_credit() {
    let env = Env::default();
    let ctx = setup(&env);
    let employee = Address::generate(&env);

    ctx.client.set_employee(&ctx.admin, &employee);
    ctx.mint.mint(&employee, &(50 * TOKEN_UNIT));
    ctx.client
        .add_savings(&employee, &employee, &(50 * TOKEN_UNIT));
    ctx.client.get_credit(&employee, &(25 * TOKEN_UNIT));
    fund_incentives(&ctx);
    ctx.client.remove_employee(&ctx.admin, &employee);

    advance_time(&env, THIRTY_DAYS);

    let interest = ctx.client.get_credit_interest_balance(&employee);
    let expected = 50 * TOKEN_UNIT - 25 * TOKEN_UNIT - interest + 10 * TOKEN_UNIT;
    let balance_before = ctx.token.balance(&employee);

    let paid = ctx.client.withdraw_saving(&employee);

    assert_eq!(paid, expected);
    assert_eq!(ctx.token.balance(&employee), balance_before + expected);
    assert_eq!(ctx.client.get_balance(&employee), 0);
    assert_eq!(ctx.client.get_credit_balance(&employee), 0);
    assert_eq!(ctx.client.get_credit_interest_balance(&employee), 0);
    assert_eq!(ctx.client.get_earned_incentive(&employee), 0);
    assert!(!ctx.client.is_employee(&employee));
}

#[test]
fn test_withdrawal_emits_retirement_record() {
    let env = Env::default();
    let ctx = setup(&env);
    let employee = Address::generate(&env);

    ctx.client.set_employee(&ctx.admin, &employee);
    ctx.mint.mint(&employee, &(50 * TOKEN_UNIT));
    ctx.client
        .add_savings(&employee, &employee, &(50 * TOKEN_UNIT));
    fund_incentives(&ctx);
    ctx.client.remove_employee(&ctx.admin, &employee);
    advance_time(&env, THIRTY_DAYS);

    let paid = ctx.client.withdraw_saving(&employee);
    assert_eq!(paid, 60 * TOKEN_UNIT);

    let events = env.events().all();
    assert_eq!(
        vec![&env, events.last().unwrap()],
        vec![
            &env,
            (
                ctx.client.address.clone(),
                (symbol_short!("retired"), employee.clone()).into_val(&env),
                SavingRetiredEvent {
                    employee: employee.clone(),
                    amount: paid,
                    timestamp: env.ledger().timestamp(),
                }
                .into_val(&env)
            )
        ]
    );
}

#[test]
fn test_withdrawal_of_absent_record_pays_nothing() {
    let env = Env::default();
    let ctx = setup(&env);
    let stranger = Address::generate(&env);

    // absent records read as zero and not-employed
    assert_eq!(ctx.client.withdraw_saving(&stranger), 0);
    assert_eq!(ctx.token.balance(&stranger), 0);
}
