use common::PercentageMath;
use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::loan::Loan;
use soroban_sdk::{log, token, Address, Env};

use crate::event;
use crate::storage::{
    add_escrowed_collateral, read_borrower_loans, read_collateral_asset, read_ledger_config,
    read_next_loan_id, write_borrower_loans, write_loan, write_next_loan_id,
};

use super::utils::validation::{require_exact_collateral, require_non_negative_amount};

/// Opens a loan of `amount` for `who`, taking `collateral` into custody.
///
/// `collateral` is the value attached to the call and must equal
/// `amount * collateral_requirement / 100` rounded down.
/// Returns the id of the new loan.
pub fn create_loan(
    env: &Env,
    who: &Address,
    amount: i128,
    collateral: i128,
) -> Result<u64, Error> {
    who.require_auth();

    let config = read_ledger_config(env)?;
    require_non_negative_amount(env, amount);

    let collateral_amount = amount
        .percent_mul_floor(config.collateral_requirement)
        .ok_or(Error::MathOverflowError)?;
    require_exact_collateral(env, collateral, collateral_amount);

    let loan_id = read_next_loan_id(env);
    let next_loan_id = loan_id.checked_add(1).ok_or(Error::MathOverflowError)?;
    let loan = Loan::new(loan_id, who.clone(), amount, collateral_amount);

    let mut borrower_loans = read_borrower_loans(env, who);
    borrower_loans.push_back(loan_id);

    if collateral_amount > 0 {
        token::Client::new(env, &read_collateral_asset(env)?).transfer(
            who,
            &env.current_contract_address(),
            &collateral_amount,
        );
    }

    write_loan(env, &loan);
    write_borrower_loans(env, who, &borrower_loans);
    write_next_loan_id(env, next_loan_id);
    add_escrowed_collateral(env, collateral_amount)?;

    event::loan_created(env, &loan);
    log!(env, "loan created", loan_id, collateral_amount);

    Ok(loan_id)
}
