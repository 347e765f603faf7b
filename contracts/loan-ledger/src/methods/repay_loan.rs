use loan_ledger_interface::types::error::Error;
use soroban_sdk::{log, token, Address, Env};

use crate::event;
use crate::storage::{
    add_escrowed_collateral, read_collateral_asset, read_loan, read_owner, write_loan,
};

use super::utils::validation::{require_borrower, require_exact_repayment, require_not_repaid};

/// Repays loan `loan_id` with `payment` attached by `who`.
///
/// Checks run in order: the loan exists, `who` is its borrower, it is not
/// repaid yet, `payment` equals the principal. The payment goes to the ledger
/// owner and the escrowed collateral goes back to the borrower.
pub fn repay_loan(env: &Env, who: &Address, loan_id: u64, payment: i128) -> Result<(), Error> {
    who.require_auth();

    let mut loan = read_loan(env, loan_id)?;
    require_borrower(env, &loan, who);
    require_not_repaid(env, &loan);
    require_exact_repayment(env, &loan, payment);

    let owner = read_owner(env)?;
    let collateral_asset = token::Client::new(env, &read_collateral_asset(env)?);

    loan.is_repaid = true;

    let collateral_to_release = loan
        .collateral_amount
        .checked_neg()
        .ok_or(Error::MathOverflowError)?;
    add_escrowed_collateral(env, collateral_to_release)?;
    write_loan(env, &loan);

    if payment > 0 {
        collateral_asset.transfer(who, &owner, &payment);
    }

    if loan.collateral_amount > 0 {
        collateral_asset.transfer(
            &env.current_contract_address(),
            who,
            &loan.collateral_amount,
        );
    }

    event::loan_repaid(env, &loan);
    log!(env, "loan repaid", loan_id, payment);

    Ok(())
}
