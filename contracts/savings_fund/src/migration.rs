use soroban_sdk::{Address, Env};

use crate::errors::SavingsError;
use crate::events::{emit_wallet_changed, WalletChangedEvent};
use crate::registry::require_admin;
use crate::storage::{
    add_member, drop_member, has_account, read_account, read_config, remove_account,
    write_account, EmployeeAccount, WALLET_DORMANCY_SECONDS,
};

/// Self-service wallet change: the employee relocates their entire ledger
/// record onto a new identity.
pub fn change_my_own_wallet(
    env: &Env,
    caller: Address,
    new_wallet: Address,
) -> Result<(), SavingsError> {
    caller.require_auth();
    read_config(env)?;

    let account = read_account(env, &caller);
    if !account.is_employee {
        return Err(SavingsError::NotEmployed);
    }
    if has_account(env, &new_wallet) {
        return Err(SavingsError::WalletIsActiveYet);
    }

    move_account(env, &caller, &new_wallet, account);
    Ok(())
}

/// Admin-side wallet reassignment, gated on credit-line dormancy so an
/// actively used credit line cannot be silently reassigned.
pub fn change_employee_wallet(
    env: &Env,
    caller: Address,
    old_wallet: Address,
    new_wallet: Address,
) -> Result<(), SavingsError> {
    require_admin(env, &caller)?;

    let account = read_account(env, &old_wallet);
    let now = env.ledger().timestamp();
    if now.saturating_sub(account.last_credit_activity) < WALLET_DORMANCY_SECONDS {
        return Err(SavingsError::WalletIsActiveYet);
    }
    if has_account(env, &new_wallet) {
        return Err(SavingsError::WalletIsActiveYet);
    }

    move_account(env, &old_wallet, &new_wallet, account);
    Ok(())
}

// Both entry points reject an occupied destination, so the write cannot
// clobber a live record or strand its share of the liability counter.
fn move_account(env: &Env, old_wallet: &Address, new_wallet: &Address, account: EmployeeAccount) {
    remove_account(env, old_wallet);
    drop_member(env, old_wallet);

    write_account(env, new_wallet, &account);
    add_member(env, new_wallet);

    emit_wallet_changed(
        env,
        WalletChangedEvent {
            old_wallet: old_wallet.clone(),
            new_wallet: new_wallet.clone(),
        },
    );
}
