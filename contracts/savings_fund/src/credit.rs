use soroban_sdk::{token, Address, Env};

use crate::errors::SavingsError;
use crate::events::{
    emit_credit_issued, emit_credit_repaid, CreditIssuedEvent, CreditRepaidEvent,
};
use crate::registry::require_employee;
use crate::storage::{
    read_account, read_config, write_account, EmployeeAccount, RATE_PRECISION,
};

/// Simple interest earned since the last checkpoint, without mutating the
/// account: `principal * rate% * elapsed_seconds / RATE_PRECISION`.
pub fn pending_interest(account: &EmployeeAccount, interest_percentage: u32, now: u64) -> i128 {
    if account.credit_principal == 0 {
        return 0;
    }
    let elapsed = now.saturating_sub(account.credit_checkpoint);
    account.credit_principal * interest_percentage as i128 * elapsed as i128 / RATE_PRECISION
}

/// Folds elapsed-time interest into `accrued_interest` and moves the
/// checkpoint to `now`. Must run before any principal change so interest is
/// never computed retroactively on the new principal.
fn settle_interest(account: &mut EmployeeAccount, interest_percentage: u32, now: u64) {
    account.accrued_interest += pending_interest(account, interest_percentage, now);
    account.credit_checkpoint = now;
}

fn credit_limit(account: &EmployeeAccount, max_credit_percentage: u32) -> i128 {
    account.savings_balance * max_credit_percentage as i128 / 100
}

/// Issues credit against the caller's savings and pays the tokens out.
pub fn get_credit(env: &Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
    let (config, mut account) = require_employee(env, &caller)?;

    if amount <= 0 {
        return Err(SavingsError::InvalidAmount);
    }

    let now = env.ledger().timestamp();
    settle_interest(&mut account, config.interest_percentage, now);

    let leftover = credit_limit(&account, config.max_credit_percentage) - account.credit_principal;
    if amount > leftover {
        return Err(SavingsError::CreditTooLarge);
    }

    account.credit_principal += amount;
    account.last_credit_activity = now;
    let principal = account.credit_principal;
    write_account(env, &caller, &account);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &caller,
        &amount,
    );

    emit_credit_issued(
        env,
        CreditIssuedEvent {
            employee: caller,
            amount,
            principal,
        },
    );

    Ok(())
}

/// Repays credit: interest first, then principal, and any excess after both
/// are clear is credited back into savings.
pub fn pay_credit(env: &Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
    let (config, mut account) = require_employee(env, &caller)?;

    if amount <= 0 {
        return Err(SavingsError::InvalidAmount);
    }

    let token_client = token::Client::new(env, &config.token);
    if token_client.balance(&caller) < amount {
        return Err(SavingsError::NotEnoughBalance);
    }
    token_client.transfer(&caller, &env.current_contract_address(), &amount);

    let now = env.ledger().timestamp();
    settle_interest(&mut account, config.interest_percentage, now);

    let mut remaining = amount;

    let interest_paid = remaining.min(account.accrued_interest);
    account.accrued_interest -= interest_paid;
    remaining -= interest_paid;

    let principal_paid = remaining.min(account.credit_principal);
    account.credit_principal -= principal_paid;
    remaining -= principal_paid;

    // Overpayment beyond a full settlement lands in savings.
    if remaining > 0 {
        account.savings_balance += remaining;
    }

    account.last_credit_activity = now;
    write_account(env, &caller, &account);

    emit_credit_repaid(
        env,
        CreditRepaidEvent {
            employee: caller,
            interest_paid,
            principal_paid,
            excess_to_savings: remaining,
        },
    );

    Ok(())
}

pub fn get_credit_balance(env: &Env, id: &Address) -> i128 {
    read_account(env, id).credit_principal
}

/// Accrued plus live interest at the current timestamp. Pure read.
pub fn get_credit_interest_balance(env: &Env, id: &Address) -> i128 {
    let account = read_account(env, id);
    match read_config(env) {
        Ok(config) => {
            account.accrued_interest
                + pending_interest(&account, config.interest_percentage, env.ledger().timestamp())
        }
        Err(_) => 0,
    }
}

/// How much more the employee could still borrow, floored at zero.
pub fn get_leftover_max_credit(env: &Env, id: &Address) -> i128 {
    let account = read_account(env, id);
    match read_config(env) {
        Ok(config) => {
            (credit_limit(&account, config.max_credit_percentage) - account.credit_principal).max(0)
        }
        Err(_) => 0,
    }
}
