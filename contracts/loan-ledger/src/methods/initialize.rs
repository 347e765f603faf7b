use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_collateral_asset, write_ledger_config, write_owner};

use super::utils::validation::{require_owner_not_exist, require_positive_percent};

pub fn initialize(
    env: &Env,
    owner: &Address,
    collateral_asset: &Address,
    config: &LedgerConfig,
) -> Result<(), Error> {
    require_owner_not_exist(env);
    owner.require_auth();
    require_positive_percent(env, config.collateral_requirement);

    write_owner(env, owner);
    write_collateral_asset(env, collateral_asset);
    write_ledger_config(env, config);

    event::initialized(env, owner, collateral_asset, config);

    Ok(())
}
