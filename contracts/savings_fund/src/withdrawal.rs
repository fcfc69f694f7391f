use soroban_sdk::{token, Address, Env};

use crate::credit::pending_interest;
use crate::errors::SavingsError;
use crate::events::{emit_saving_retired, SavingRetiredEvent};
use crate::storage::{drop_member, read_account, read_config, remove_account};

/// Final payout on separation from employment.
///
/// Requires that the caller is no longer employed and that no unfunded
/// incentive is owed to them. The payout nets outstanding credit and live
/// interest against savings and includes any funded incentive; the record
/// is deleted afterwards.
pub fn withdraw_saving(env: &Env, caller: Address) -> Result<i128, SavingsError> {
    caller.require_auth();
    let config = read_config(env)?;
    let account = read_account(env, &caller);

    if account.is_employee {
        return Err(SavingsError::IsStillEmployed);
    }
    if account.unfunded_incentive > 0 {
        return Err(SavingsError::IncentivesAreNotPayYet);
    }

    let now = env.ledger().timestamp();
    let debt = account.credit_principal
        + account.accrued_interest
        + pending_interest(&account, config.interest_percentage, now);
    if debt > account.savings_balance {
        return Err(SavingsError::CreditTooLarge);
    }

    let amount = account.savings_balance - debt + account.earned_incentive;
    if amount > 0 {
        token::Client::new(env, &config.token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );
    }

    remove_account(env, &caller);
    drop_member(env, &caller);

    emit_saving_retired(
        env,
        SavingRetiredEvent {
            employee: caller,
            amount,
            timestamp: now,
        },
    );

    Ok(amount)
}
