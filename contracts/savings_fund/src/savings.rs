use soroban_sdk::{token, Address, Env};

use crate::errors::SavingsError;
use crate::events::{
    emit_incentives_funded, emit_savings_added, IncentivesFundedEvent, SavingsAddedEvent,
};
use crate::registry::require_admin_or_beneficiary;
use crate::storage::{
    add_member, read_account, read_config, read_members, read_total_unfunded, write_account,
    write_total_unfunded,
};

/// Deposits `amount` of the stable token into `beneficiary`'s savings and
/// records the deposit-time incentive liability.
///
/// The tokens are pulled from the caller, so the admin can fund an
/// employee's account directly.
pub fn add_savings(
    env: &Env,
    caller: Address,
    beneficiary: Address,
    amount: i128,
) -> Result<(), SavingsError> {
    let config = require_admin_or_beneficiary(env, &caller, &beneficiary)?;

    if amount <= 0 {
        return Err(SavingsError::InvalidAmount);
    }

    let token_client = token::Client::new(env, &config.token);
    if token_client.balance(&caller) < amount {
        return Err(SavingsError::NotEnoughBalance);
    }

    let mut account = read_account(env, &beneficiary);
    if account.savings_balance + amount > config.max_amount_of_saving {
        return Err(SavingsError::ExceedAmountOfSaving);
    }
    token_client.transfer(&caller, &env.current_contract_address(), &amount);

    account.savings_balance += amount;

    // Incentive is a liability at deposit time; it becomes claimable only
    // once the admin funds the whole outstanding pool.
    let incentive_accrued = amount * config.incentive_percentage as i128 / 100;
    if incentive_accrued > 0 {
        account.unfunded_incentive += incentive_accrued;
        write_total_unfunded(env, read_total_unfunded(env) + incentive_accrued);
    }

    write_account(env, &beneficiary, &account);
    add_member(env, &beneficiary);

    emit_savings_added(
        env,
        SavingsAddedEvent {
            employee: beneficiary,
            amount,
            incentive_accrued,
        },
    );

    Ok(())
}

/// Funds the incentive pool and settles every outstanding liability in one
/// pass. Anything funded beyond the outstanding total stays in the contract
/// as surplus.
pub fn add_incentives(env: &Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
    caller.require_auth();
    let config = read_config(env)?;

    if amount <= 0 {
        return Err(SavingsError::InvalidAmount);
    }

    let settled_liability = read_total_unfunded(env);
    if amount < settled_liability {
        return Err(SavingsError::NotEnoughAmountOfIncentives);
    }

    let token_client = token::Client::new(env, &config.token);
    if token_client.balance(&caller) < amount {
        return Err(SavingsError::NotEnoughBalance);
    }
    token_client.transfer(&caller, &env.current_contract_address(), &amount);

    for member in read_members(env).iter() {
        let mut account = read_account(env, &member);
        if account.unfunded_incentive > 0 {
            account.earned_incentive += account.unfunded_incentive;
            account.unfunded_incentive = 0;
            write_account(env, &member, &account);
        }
    }
    write_total_unfunded(env, 0);

    emit_incentives_funded(
        env,
        IncentivesFundedEvent {
            funder: caller,
            amount,
            settled_liability,
        },
    );

    Ok(())
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    read_account(env, id).savings_balance
}

pub fn get_earned_incentive(env: &Env, id: &Address) -> i128 {
    read_account(env, id).earned_incentive
}

pub fn get_total_incentives_to_pay(env: &Env) -> i128 {
    read_total_unfunded(env)
}
