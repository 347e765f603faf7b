use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use loan_ledger_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    CollateralAsset,
    LedgerConfig,
    NextLoanId,
    EscrowedCollateral,
    Loan(u64),
    BorrowerLoans(Address),
}

pub fn has_owner(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::Uninitialized)
}

pub fn write_collateral_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::CollateralAsset, asset);
}

pub fn read_collateral_asset(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::CollateralAsset)
        .ok_or(Error::Uninitialized)
}

pub fn write_ledger_config(env: &Env, config: &LedgerConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::LedgerConfig, config);
}

pub fn read_ledger_config(env: &Env) -> Result<LedgerConfig, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::LedgerConfig)
        .ok_or(Error::Uninitialized)
}

/// Id the next created loan receives. Ids start at 1
pub fn read_next_loan_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::NextLoanId)
        .unwrap_or(1)
}

pub fn write_next_loan_id(env: &Env, next_loan_id: u64) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::NextLoanId, &next_loan_id);
}

pub fn read_escrowed_collateral(env: &Env) -> i128 {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::EscrowedCollateral)
        .unwrap_or(0i128)
}

pub fn write_escrowed_collateral(env: &Env, escrowed: i128) -> Result<(), Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    assert_with_error!(env, !escrowed.is_negative(), Error::MustBePositive);

    env.storage()
        .instance()
        .set(&DataKey::EscrowedCollateral, &escrowed);

    Ok(())
}

pub fn add_escrowed_collateral(env: &Env, amount: i128) -> Result<i128, Error> {
    let escrowed = read_escrowed_collateral(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_escrowed_collateral(env, escrowed)?;

    Ok(escrowed)
}

pub fn read_loan(env: &Env, loan_id: u64) -> Result<Loan, Error> {
    let key = DataKey::Loan(loan_id);
    let loan = env.storage().persistent().get(&key);

    if loan.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    loan.ok_or(Error::LoanNotFound)
}

pub fn write_loan(env: &Env, loan: &Loan) {
    let key = DataKey::Loan(loan.id);
    env.storage().persistent().set(&key, loan);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_borrower_loans(env: &Env, borrower: &Address) -> Vec<u64> {
    let key = DataKey::BorrowerLoans(borrower.clone());
    let loans = env.storage().persistent().get(&key);

    if loans.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    loans.unwrap_or(vec![env])
}

pub fn write_borrower_loans(env: &Env, borrower: &Address, loans: &Vec<u64>) {
    let key = DataKey::BorrowerLoans(borrower.clone());
    env.storage().persistent().set(&key, loans);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}
