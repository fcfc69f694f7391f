//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const SAVINGS_ADDED_EVENT: Symbol = symbol_short!("saved");
pub const INCENTIVES_FUNDED_EVENT: Symbol = symbol_short!("incfund");
pub const CREDIT_ISSUED_EVENT: Symbol = symbol_short!("credit");
pub const CREDIT_REPAID_EVENT: Symbol = symbol_short!("repaid");
pub const SAVING_RETIRED_EVENT: Symbol = symbol_short!("retired");
pub const WALLET_CHANGED_EVENT: Symbol = symbol_short!("walletchg");
pub const EMPLOYEE_ADDED_EVENT: Symbol = symbol_short!("empadd");
pub const EMPLOYEE_REMOVED_EVENT: Symbol = symbol_short!("emprm");
pub const CONFIG_UPDATED_EVENT: Symbol = symbol_short!("cfgupd");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingsAddedEvent {
    pub employee: Address,
    pub amount: i128,
    pub incentive_accrued: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncentivesFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub settled_liability: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditIssuedEvent {
    pub employee: Address,
    pub amount: i128,
    pub principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditRepaidEvent {
    pub employee: Address,
    pub interest_paid: i128,
    pub principal_paid: i128,
    pub excess_to_savings: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingRetiredEvent {
    pub employee: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletChangedEvent {
    pub old_wallet: Address,
    pub new_wallet: Address,
}

pub fn emit_savings_added(env: &Env, event: SavingsAddedEvent) {
    env.events()
        .publish((SAVINGS_ADDED_EVENT, event.employee.clone()), event);
}

pub fn emit_incentives_funded(env: &Env, event: IncentivesFundedEvent) {
    env.events()
        .publish((INCENTIVES_FUNDED_EVENT, event.funder.clone()), event);
}

pub fn emit_credit_issued(env: &Env, event: CreditIssuedEvent) {
    env.events()
        .publish((CREDIT_ISSUED_EVENT, event.employee.clone()), event);
}

pub fn emit_credit_repaid(env: &Env, event: CreditRepaidEvent) {
    env.events()
        .publish((CREDIT_REPAID_EVENT, event.employee.clone()), event);
}

pub fn emit_saving_retired(env: &Env, event: SavingRetiredEvent) {
    env.events()
        .publish((SAVING_RETIRED_EVENT, event.employee.clone()), event);
}

pub fn emit_wallet_changed(env: &Env, event: WalletChangedEvent) {
    env.events()
        .publish((WALLET_CHANGED_EVENT, event.old_wallet.clone()), event);
}

pub fn emit_employee_added(env: &Env, employee: &Address) {
    env.events()
        .publish((EMPLOYEE_ADDED_EVENT,), employee.clone());
}

pub fn emit_employee_removed(env: &Env, employee: &Address) {
    env.events()
        .publish((EMPLOYEE_REMOVED_EVENT,), employee.clone());
}

pub fn emit_config_updated(env: &Env, setting: Symbol) {
    env.events().publish((CONFIG_UPDATED_EVENT,), setting);
}
