use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    /// Incorrect collateral amount
    InvalidCollateral = 100,
    LoanNotFound = 101,
    /// Only the borrower can repay the loan
    Unauthorized = 102,
    /// Loan is already repaid
    AlreadyRepaid = 103,
    /// Repayment must match the loan amount
    InvalidRepayment = 104,

    InvalidAmount = 200,
    MustBePositive = 201,

    MathOverflowError = 400,
}
