pub mod create_loan;
pub mod initialize;
pub mod repay_loan;

mod utils;
