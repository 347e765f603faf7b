use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct Loan {
    pub id: u64,
    pub borrower: Address,
    pub amount: i128,
    pub collateral_amount: i128,
    pub is_repaid: bool,
}

impl Loan {
    pub fn new(id: u64, borrower: Address, amount: i128, collateral_amount: i128) -> Self {
        Self {
            id,
            borrower,
            amount,
            collateral_amount,
            is_repaid: false,
        }
    }
}
