use cosmwasm_std::{Addr, Deps, MessageInfo, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Achievement, ACHIEVEMENTS, BALANCES, CLAIMS, CONFIG, GAME_ADMINS};

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::OwnerOnly);
    }
    Ok(())
}

/// Owner, or an admin whose flag is currently `true`.
pub fn is_admin_or_owner(deps: Deps, account: &Addr) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    if *account == config.owner {
        return Ok(true);
    }
    is_game_admin(deps.storage, account)
}

pub fn assert_admin_or_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !is_admin_or_owner(deps, sender)? {
        return Err(ContractError::Unauthorized {
            role: "game admin or owner".to_string(),
        });
    }
    Ok(())
}

pub fn is_game_admin(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(GAME_ADMINS.may_load(storage, account)?.unwrap_or(false))
}

// No message carries native funds; anything attached would be stranded.
pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

pub fn load_achievement(deps: Deps, achievement_id: u64) -> Result<Achievement, ContractError> {
    ACHIEVEMENTS
        .may_load(deps.storage, achievement_id)?
        .ok_or(ContractError::NotFound { achievement_id })
}

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn is_claimed(storage: &dyn Storage, player: &Addr, achievement_id: u64) -> StdResult<bool> {
    Ok(CLAIMS
        .may_load(storage, (player, achievement_id))?
        .map(|c| c.claimed)
        .unwrap_or(false))
}

/// Add freshly minted tokens to `account`. Returns the new balance.
pub fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance = balance_of(storage, account)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;
    BALANCES.save(storage, account, &balance)?;
    Ok(balance)
}

/// Zero-sum move of `amount` from `from` to `to`.
///
/// Both new balances are computed before either is written, so a failed
/// debit or an overflowing credit leaves storage untouched. A transfer to
/// oneself is a no-op once the balance check passes.
pub fn move_tokens(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let from_balance = balance_of(storage, from)?;
    let debited =
        from_balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                account: from.to_string(),
                available: from_balance.to_string(),
                requested: amount.to_string(),
            })?;
    if from == to {
        return Ok(());
    }
    let credited = balance_of(storage, to)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;

    BALANCES.save(storage, from, &debited)?;
    BALANCES.save(storage, to, &credited)?;
    Ok(())
}
