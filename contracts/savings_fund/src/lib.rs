#![no_std]

pub mod credit;
pub mod errors;
pub mod events;
pub mod migration;
pub mod policy;
pub mod registry;
pub mod savings;
pub mod storage;
pub mod withdrawal;

pub use crate::errors::SavingsError;
pub use crate::storage::{EmployeeAccount, SavingsConfig, RATE_PRECISION, WALLET_DORMANCY_SECONDS};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

/// Payroll savings fund.
///
/// A designated admin registers employees and configures policy; employees
/// deposit stable tokens, earn a deposit-time incentive once the admin funds
/// it, borrow short-term credit against a fraction of their savings, repay
/// with simple time-based interest, and cash out on separation. Wallet
/// migration carries the whole ledger record atomically.
#[contract]
pub struct SavingsFundContract;

#[contractimpl]
impl SavingsFundContract {
    /// Initializes the fund with its policy configuration.
    ///
    /// # Arguments
    /// * `admin` - Only identity allowed to mutate policy and the registry
    /// * `token` - Stable token contract backing all balances
    /// * `incentive_percentage` - Deposit incentive, percent of each deposit
    /// * `interest_percentage` - Credit interest rate per second, scaled by `RATE_PRECISION`
    /// * `max_credit_percentage` - Borrowable fraction of savings
    /// * `max_amount_of_saving` - Per-account savings cap
    ///
    /// # Access Control
    /// Callable once; requires admin authentication.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        incentive_percentage: u32,
        interest_percentage: u32,
        max_credit_percentage: u32,
        max_amount_of_saving: i128,
    ) -> Result<(), SavingsError> {
        policy::initialize(
            &env,
            admin,
            token,
            incentive_percentage,
            interest_percentage,
            max_credit_percentage,
            max_amount_of_saving,
        )
    }

    /// Admin-only: updates the borrowable fraction of savings.
    pub fn set_max_credit_percentage(
        env: Env,
        caller: Address,
        percentage: u32,
    ) -> Result<(), SavingsError> {
        policy::set_max_credit_percentage(&env, caller, percentage)
    }

    /// Admin-only: updates the per-account savings cap.
    pub fn set_max_amount_of_saving(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), SavingsError> {
        policy::set_max_amount_of_saving(&env, caller, amount)
    }

    /// Returns the policy configuration, or None before initialization.
    pub fn get_config(env: Env) -> Option<SavingsConfig> {
        storage::read_config(&env).ok()
    }

    /// Admin-only: marks each identity as employed, creating zeroed records
    /// for identities seen for the first time.
    pub fn set_employees(
        env: Env,
        caller: Address,
        employees: Vec<Address>,
    ) -> Result<(), SavingsError> {
        registry::set_employees(&env, caller, employees)
    }

    /// Admin-only: single-identity variant of `set_employees`.
    pub fn set_employee(env: Env, caller: Address, employee: Address) -> Result<(), SavingsError> {
        registry::set_employee(&env, caller, employee)
    }

    /// Admin-only: clears the employed flag. Balances are preserved so the
    /// separated employee can still settle and withdraw.
    pub fn remove_employees(
        env: Env,
        caller: Address,
        employees: Vec<Address>,
    ) -> Result<(), SavingsError> {
        registry::remove_employees(&env, caller, employees)
    }

    /// Admin-only: single-identity variant of `remove_employees`.
    pub fn remove_employee(
        env: Env,
        caller: Address,
        employee: Address,
    ) -> Result<(), SavingsError> {
        registry::remove_employee(&env, caller, employee)
    }

    pub fn is_employee(env: Env, id: Address) -> bool {
        registry::is_employee(&env, &id)
    }

    /// Deposits stable tokens into `beneficiary`'s savings.
    ///
    /// The caller must be the admin or the employed beneficiary; tokens are
    /// pulled from the caller. Each deposit accrues
    /// `amount * incentive_percentage / 100` of unfunded incentive.
    pub fn add_savings(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), SavingsError> {
        savings::add_savings(&env, caller, beneficiary, amount)
    }

    pub fn get_balance(env: Env, id: Address) -> i128 {
        savings::get_balance(&env, &id)
    }

    /// Funds the incentive pool. Open to any caller; the amount must cover
    /// the whole outstanding liability, which is then settled into earned
    /// incentive for every employee in one pass.
    pub fn add_incentives(env: Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
        savings::add_incentives(&env, caller, amount)
    }

    pub fn get_earned_incentive(env: Env, id: Address) -> i128 {
        savings::get_earned_incentive(&env, &id)
    }

    pub fn get_total_incentives_to_pay(env: Env) -> i128 {
        savings::get_total_incentives_to_pay(&env)
    }

    /// Issues credit against the caller's savings and transfers the tokens
    /// out. Fails with `CreditTooLarge` past the savings fraction.
    pub fn get_credit(env: Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
        credit::get_credit(&env, caller, amount)
    }

    /// Repays credit. Payment settles interest first, then principal; any
    /// excess after both are clear is credited into savings.
    pub fn pay_credit(env: Env, caller: Address, amount: i128) -> Result<(), SavingsError> {
        credit::pay_credit(&env, caller, amount)
    }

    pub fn get_credit_balance(env: Env, id: Address) -> i128 {
        credit::get_credit_balance(&env, &id)
    }

    /// Accrued plus live interest at the current ledger timestamp.
    pub fn get_credit_interest_balance(env: Env, id: Address) -> i128 {
        credit::get_credit_interest_balance(&env, &id)
    }

    /// Remaining borrowable amount, floored at zero.
    pub fn get_leftover_max_credit(env: Env, id: Address) -> i128 {
        credit::get_leftover_max_credit(&env, &id)
    }

    /// Final payout on separation. Pays savings plus earned incentive net of
    /// outstanding credit and interest, then deletes the record.
    ///
    /// # Returns
    /// The paid-out token amount.
    pub fn withdraw_saving(env: Env, caller: Address) -> Result<i128, SavingsError> {
        withdrawal::withdraw_saving(&env, caller)
    }

    /// Self-service wallet migration onto `new_wallet`.
    pub fn change_my_own_wallet(
        env: Env,
        caller: Address,
        new_wallet: Address,
    ) -> Result<(), SavingsError> {
        migration::change_my_own_wallet(&env, caller, new_wallet)
    }

    /// Admin-side wallet reassignment; requires the credit line to have been
    /// dormant for `WALLET_DORMANCY_SECONDS`.
    pub fn change_employee_wallet(
        env: Env,
        caller: Address,
        old_wallet: Address,
        new_wallet: Address,
    ) -> Result<(), SavingsError> {
        migration::change_employee_wallet(&env, caller, old_wallet, new_wallet)
    }
}
