use liquidator_interface::types::error::Error;
use liquidator_interface::types::liquidation_request::LiquidationRequest;
use soroban_sdk::Env;

use crate::event;
use crate::storage::{read_config, write_pending_loan};
use crate::types::pending_loan::PendingLoan;

use super::utils::validation::{
    require_distinct_assets, require_no_pending_loan, require_positive_amount,
};

pub fn arm(env: &Env, request: &LiquidationRequest) -> Result<(), Error> {
    let config = read_config(env)?;
    config.liquidator.require_auth();

    require_no_pending_loan(env);
    require_positive_amount(env, request.debt_amount);
    require_distinct_assets(env, request);

    write_pending_loan(
        env,
        &PendingLoan {
            request: request.clone(),
        },
    );

    event::armed(env, &request.debt_asset, request.debt_amount);

    Ok(())
}
