use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::SavingsError;

/// Scaling constant converting percentage-per-second interest into whole
/// token units without fractional arithmetic.
pub const RATE_PRECISION: i128 = 100_000_000;

/// How long a credit line must sit without principal changes before the
/// admin may reassign the wallet that owns it.
pub const WALLET_DORMANCY_SECONDS: u64 = 366 * 86_400;

/// Singleton policy configuration, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingsConfig {
    pub admin: Address,
    pub token: Address,
    pub incentive_percentage: u32,
    pub interest_percentage: u32,
    pub max_credit_percentage: u32,
    pub max_amount_of_saving: i128,
}

/// Per-employee ledger state. An absent record reads as this struct with
/// every field zeroed and `is_employee = false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeAccount {
    pub is_employee: bool,
    pub savings_balance: i128,
    pub credit_principal: i128,
    pub accrued_interest: i128,
    pub credit_checkpoint: u64,
    pub last_credit_activity: u64,
    pub unfunded_incentive: i128,
    pub earned_incentive: i128,
}

impl EmployeeAccount {
    pub fn zeroed() -> Self {
        EmployeeAccount {
            is_employee: false,
            savings_balance: 0,
            credit_principal: 0,
            accrued_interest: 0,
            credit_checkpoint: 0,
            last_credit_activity: 0,
            unfunded_incentive: 0,
            earned_incentive: 0,
        }
    }
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Policy configuration singleton
    Config,
    /// Employee ledger record: identity -> EmployeeAccount
    Account(Address),
    /// Roster of identities holding a live account
    Members,
    /// Sum of unfunded_incentive over all accounts
    TotalUnfundedIncentive,
}

pub fn has_config(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<SavingsConfig, SavingsError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(SavingsError::NotInitialized)
}

pub fn write_config(env: &Env, config: &SavingsConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
}

pub fn has_account(env: &Env, id: &Address) -> bool {
    env.storage().persistent().has(&DataKey::Account(id.clone()))
}

pub fn read_account(env: &Env, id: &Address) -> EmployeeAccount {
    env.storage()
        .persistent()
        .get(&DataKey::Account(id.clone()))
        .unwrap_or(EmployeeAccount::zeroed())
}

pub fn write_account(env: &Env, id: &Address, account: &EmployeeAccount) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(id.clone()), account);
}

pub fn remove_account(env: &Env, id: &Address) {
    env.storage().persistent().remove(&DataKey::Account(id.clone()));
}

pub fn read_members(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Members)
        .unwrap_or(Vec::new(env))
}

pub fn add_member(env: &Env, id: &Address) {
    let mut members = read_members(env);
    if members.first_index_of(id).is_none() {
        members.push_back(id.clone());
        env.storage().persistent().set(&DataKey::Members, &members);
    }
}

pub fn drop_member(env: &Env, id: &Address) {
    let mut members = read_members(env);
    if let Some(index) = members.first_index_of(id) {
        let _ = members.remove(index);
        env.storage().persistent().set(&DataKey::Members, &members);
    }
}

pub fn read_total_unfunded(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalUnfundedIncentive)
        .unwrap_or(0)
}

pub fn write_total_unfunded(env: &Env, total: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalUnfundedIncentive, &total);
}
