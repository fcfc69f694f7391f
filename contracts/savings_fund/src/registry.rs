use soroban_sdk::{Address, Env, Vec};

use crate::errors::SavingsError;
use crate::events::{emit_employee_added, emit_employee_removed};
use crate::storage::{
    add_member, read_account, read_config, write_account, EmployeeAccount, SavingsConfig,
};

//-----------------------------------------------------------------------------
// Authorization guards shared by every gated operation
//-----------------------------------------------------------------------------

/// Authenticates `caller` and checks it against the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<SavingsConfig, SavingsError> {
    caller.require_auth();
    let config = read_config(env)?;
    if *caller != config.admin {
        return Err(SavingsError::NotAdmin);
    }
    Ok(config)
}

/// Deposit gate: the admin may deposit for anyone; everyone else may only
/// deposit for themselves while employed.
pub fn require_admin_or_beneficiary(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
) -> Result<SavingsConfig, SavingsError> {
    caller.require_auth();
    let config = read_config(env)?;
    if *caller == config.admin {
        return Ok(config);
    }
    if caller == beneficiary && read_account(env, beneficiary).is_employee {
        return Ok(config);
    }
    Err(SavingsError::NotAdminOrNotEmployed)
}

/// Credit gate: the caller must be a current employee acting on their own
/// account.
pub fn require_employee(
    env: &Env,
    caller: &Address,
) -> Result<(SavingsConfig, EmployeeAccount), SavingsError> {
    caller.require_auth();
    let config = read_config(env)?;
    let account = read_account(env, caller);
    if !account.is_employee {
        return Err(SavingsError::NotEmployed);
    }
    Ok((config, account))
}

//-----------------------------------------------------------------------------
// Registry mutation
//-----------------------------------------------------------------------------

pub fn set_employees(
    env: &Env,
    caller: Address,
    employees: Vec<Address>,
) -> Result<(), SavingsError> {
    require_admin(env, &caller)?;
    for employee in employees.iter() {
        mark_employed(env, &employee);
    }
    Ok(())
}

pub fn set_employee(env: &Env, caller: Address, employee: Address) -> Result<(), SavingsError> {
    require_admin(env, &caller)?;
    mark_employed(env, &employee);
    Ok(())
}

pub fn remove_employees(
    env: &Env,
    caller: Address,
    employees: Vec<Address>,
) -> Result<(), SavingsError> {
    require_admin(env, &caller)?;
    for employee in employees.iter() {
        mark_removed(env, &employee);
    }
    Ok(())
}

pub fn remove_employee(env: &Env, caller: Address, employee: Address) -> Result<(), SavingsError> {
    require_admin(env, &caller)?;
    mark_removed(env, &employee);
    Ok(())
}

pub fn is_employee(env: &Env, id: &Address) -> bool {
    read_account(env, id).is_employee
}

fn mark_employed(env: &Env, employee: &Address) {
    let mut account = read_account(env, employee);
    if !account.is_employee {
        account.is_employee = true;
        write_account(env, employee, &account);
        emit_employee_added(env, employee);
    }
    add_member(env, employee);
}

// Balances are preserved so post-separation settlement stays possible.
fn mark_removed(env: &Env, employee: &Address) {
    let mut account = read_account(env, employee);
    if account.is_employee {
        account.is_employee = false;
        write_account(env, employee, &account);
        emit_employee_removed(env, employee);
    }
}
