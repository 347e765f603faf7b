#![deny(warnings)]
#![no_std]

use loan_ledger_interface::types::{error::Error, ledger_config::LedgerConfig, loan::Loan};
use loan_ledger_interface::LoanLedgerTrait;
use methods::{create_loan::create_loan, initialize::initialize, repay_loan::repay_loan};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;

#[contract]
pub struct LoanLedger;

#[contractimpl]
impl LoanLedgerTrait for LoanLedger {
    fn initialize(
        env: Env,
        owner: Address,
        collateral_asset: Address,
        config: LedgerConfig,
    ) -> Result<(), Error> {
        initialize(&env, &owner, &collateral_asset, &config)
    }

    fn version() -> u32 {
        1
    }

    fn create_loan(env: Env, who: Address, amount: i128, collateral: i128) -> Result<u64, Error> {
        create_loan(&env, &who, amount, collateral)
    }

    fn repay_loan(env: Env, who: Address, loan_id: u64, payment: i128) -> Result<(), Error> {
        repay_loan(&env, &who, loan_id, payment)
    }

    fn get_loan(env: Env, loan_id: u64) -> Result<Loan, Error> {
        read_loan(&env, loan_id)
    }

    fn get_loans_by_borrower(env: Env, who: Address) -> Vec<u64> {
        read_borrower_loans(&env, &who)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    fn collateral_asset(env: Env) -> Result<Address, Error> {
        read_collateral_asset(&env)
    }

    fn ledger_config(env: Env) -> Result<LedgerConfig, Error> {
        read_ledger_config(&env)
    }

    fn interest_rate(env: Env) -> Result<u32, Error> {
        Ok(read_ledger_config(&env)?.interest_rate)
    }

    fn loan_duration(env: Env) -> Result<u64, Error> {
        Ok(read_ledger_config(&env)?.loan_duration)
    }

    fn collateral_requirement(env: Env) -> Result<u32, Error> {
        Ok(read_ledger_config(&env)?.collateral_requirement)
    }

    fn loan_count(env: Env) -> u64 {
        read_next_loan_id(&env).saturating_sub(1)
    }

    fn escrowed_collateral(env: Env) -> i128 {
        read_escrowed_collateral(&env)
    }
}
