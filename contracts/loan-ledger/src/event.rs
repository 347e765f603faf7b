use loan_ledger_interface::types::ledger_config::LedgerConfig;
use loan_ledger_interface::types::loan::Loan;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(
    e: &Env,
    owner: &Address,
    collateral_asset: &Address,
    config: &LedgerConfig,
) {
    let topics = (Symbol::new(e, "initialize"), owner, collateral_asset);
    e.events().publish(
        topics,
        (
            config.interest_rate,
            config.loan_duration,
            config.collateral_requirement,
        ),
    );
}

pub(crate) fn loan_created(e: &Env, loan: &Loan) {
    let topics = (Symbol::new(e, "loan_created"), loan.borrower.clone());
    e.events()
        .publish(topics, (loan.id, loan.amount, loan.collateral_amount));
}

pub(crate) fn loan_repaid(e: &Env, loan: &Loan) {
    let topics = (Symbol::new(e, "loan_repaid"), loan.borrower.clone());
    e.events()
        .publish(topics, (loan.id, loan.amount, loan.collateral_amount));
}
