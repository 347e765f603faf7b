use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::has_owner;

pub fn require_owner_not_exist(env: &Env) {
    if has_owner(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_positive_percent(env: &Env, value: u32) {
    assert_with_error!(env, value > 0, Error::MustBePositive);
}

pub fn require_non_negative_amount(env: &Env, amount: i128) {
    assert_with_error!(env, !amount.is_negative(), Error::InvalidAmount);
}

/// Attached collateral must match the requirement exactly, neither more nor less
pub fn require_exact_collateral(env: &Env, collateral: i128, required: i128) {
    assert_with_error!(env, collateral == required, Error::InvalidCollateral);
}

pub fn require_borrower(env: &Env, loan: &Loan, who: &Address) {
    assert_with_error!(env, loan.borrower.eq(who), Error::Unauthorized);
}

pub fn require_not_repaid(env: &Env, loan: &Loan) {
    assert_with_error!(env, !loan.is_repaid, Error::AlreadyRepaid);
}

pub fn require_exact_repayment(env: &Env, loan: &Loan, payment: i128) {
    assert_with_error!(env, payment == loan.amount, Error::InvalidRepayment);
}
