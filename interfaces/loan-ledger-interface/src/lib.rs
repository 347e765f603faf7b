#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::error::Error;
use types::ledger_config::LedgerConfig;
use types::loan::Loan;

pub mod types;

pub struct Spec;

/// Interface for LoanLedger
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LoanLedgerClient")]
pub trait LoanLedgerTrait {
    fn initialize(
        env: Env,
        owner: Address,
        collateral_asset: Address,
        config: LedgerConfig,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn create_loan(env: Env, who: Address, amount: i128, collateral: i128) -> Result<u64, Error>;

    fn repay_loan(env: Env, who: Address, loan_id: u64, payment: i128) -> Result<(), Error>;

    fn get_loan(env: Env, loan_id: u64) -> Result<Loan, Error>;

    fn get_loans_by_borrower(env: Env, who: Address) -> Vec<u64>;

    fn owner(env: Env) -> Result<Address, Error>;

    fn collateral_asset(env: Env) -> Result<Address, Error>;

    fn ledger_config(env: Env) -> Result<LedgerConfig, Error>;

    fn interest_rate(env: Env) -> Result<u32, Error>;

    fn loan_duration(env: Env) -> Result<u64, Error>;

    fn collateral_requirement(env: Env) -> Result<u32, Error>;

    fn loan_count(env: Env) -> u64;

    fn escrowed_collateral(env: Env) -> i128;
}
