use soroban_sdk::{symbol_short, Address, Env, String};

use crate::errors::SavingsError;
use crate::events::emit_config_updated;
use crate::registry::require_admin;
use crate::storage::{has_config, write_config, write_total_unfunded, SavingsConfig};

/// Canonical strkey of the all-zero ed25519 account.
pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

fn is_zero_address(env: &Env, address: &Address) -> bool {
    address.to_string() == String::from_str(env, ZERO_ADDRESS)
}

/// Writes the policy configuration. Runs once; the authenticated admin
/// becomes the only identity allowed to mutate policy or the registry.
pub fn initialize(
    env: &Env,
    admin: Address,
    token: Address,
    incentive_percentage: u32,
    interest_percentage: u32,
    max_credit_percentage: u32,
    max_amount_of_saving: i128,
) -> Result<(), SavingsError> {
    admin.require_auth();

    if has_config(env) {
        return Err(SavingsError::AlreadyInitialized);
    }
    if is_zero_address(env, &token) {
        return Err(SavingsError::AddressZero);
    }
    if incentive_percentage > 100 || interest_percentage > 100 || max_credit_percentage > 100 {
        return Err(SavingsError::WrongPercentage);
    }
    if max_amount_of_saving < 0 {
        return Err(SavingsError::InvalidAmount);
    }

    write_config(
        env,
        &SavingsConfig {
            admin,
            token,
            incentive_percentage,
            interest_percentage,
            max_credit_percentage,
            max_amount_of_saving,
        },
    );
    write_total_unfunded(env, 0);

    Ok(())
}

/// Admin-only update of the borrowable fraction of savings.
pub fn set_max_credit_percentage(
    env: &Env,
    caller: Address,
    percentage: u32,
) -> Result<(), SavingsError> {
    let mut config = require_admin(env, &caller)?;

    if percentage > 100 {
        return Err(SavingsError::WrongPercentage);
    }

    config.max_credit_percentage = percentage;
    write_config(env, &config);
    emit_config_updated(env, symbol_short!("maxcredit"));

    Ok(())
}

/// Admin-only update of the per-account savings cap.
pub fn set_max_amount_of_saving(
    env: &Env,
    caller: Address,
    amount: i128,
) -> Result<(), SavingsError> {
    let mut config = require_admin(env, &caller)?;

    if amount < 0 {
        return Err(SavingsError::InvalidAmount);
    }

    config.max_amount_of_saving = amount;
    write_config(env, &config);
    emit_config_updated(env, symbol_short!("maxsaving"));

    Ok(())
}
