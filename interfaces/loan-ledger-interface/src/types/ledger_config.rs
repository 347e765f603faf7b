use soroban_sdk::contracttype;

/// Parameters fixed when the ledger is initialized
#[derive(Debug, Clone, Eq, PartialEq)]
#[contracttype]
pub struct LedgerConfig {
    /// Interest rate per mille. Stored, not applied to repayments
    pub interest_rate: u32,
    /// Loan duration in seconds. Stored, not enforced
    pub loan_duration: u64,
    /// Required collateral as a percentage of the principal, 150 - 150%
    pub collateral_requirement: u32,
}
