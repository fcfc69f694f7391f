use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Savings Fund Errors
//-----------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SavingsError {
    /// Raised when initialize is called twice
    AlreadyInitialized = 1,
    /// Raised when an operation runs before initialize
    NotInitialized = 2,
    /// Raised when the stable token is the zero address
    AddressZero = 3,
    /// Raised when a percentage parameter exceeds 100
    WrongPercentage = 4,
    /// Raised when an amount parameter is zero or negative
    InvalidAmount = 5,
    /// Raised when a caller other than the admin runs an admin operation
    NotAdmin = 6,
    /// Raised when a deposit caller is neither admin nor the employed beneficiary
    NotAdminOrNotEmployed = 7,
    /// Raised when a credit operation caller is not a current employee
    NotEmployed = 8,
    /// Raised when a deposit would push savings past the per-account cap
    ExceedAmountOfSaving = 9,
    /// Raised when the caller's token balance cannot cover the transfer
    NotEnoughBalance = 10,
    /// Raised when incentive funding is below the outstanding liability
    NotEnoughAmountOfIncentives = 11,
    /// Raised when credit would exceed the savings fraction, or debt exceeds savings at withdrawal
    CreditTooLarge = 12,
    /// Raised when a current employee attempts a final withdrawal
    IsStillEmployed = 13,
    /// Raised when withdrawal is attempted with unfunded incentive outstanding
    IncentivesAreNotPayYet = 14,
    /// Raised when the admin reassigns a wallet whose credit line is still active
    WalletIsActiveYet = 15,
}
