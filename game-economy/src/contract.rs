#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::helpers::{
    assert_admin_or_owner, assert_owner, balance_of, credit, is_claimed, is_game_admin,
    load_achievement, move_tokens, reject_funds,
};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:game-economy";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let config = Config {
        owner,
        token_name: msg.token_name,
        token_symbol: msg.token_symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str()))
}

// ─── Execute ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::InitializeTokenSupply { amount } => {
            execute_initialize_token_supply(deps, env, info, amount)
        }
        ExecuteMsg::AddGameAdmin { admin } => execute_add_game_admin(deps, env, info, admin),
        ExecuteMsg::RemoveGameAdmin { admin } => {
            execute_remove_game_admin(deps, env, info, admin)
        }
        ExecuteMsg::AddAchievement {
            achievement_id,
            name,
            description,
            reward_amount,
        } => execute_add_achievement(
            deps,
            env,
            info,
            achievement_id,
            name,
            description,
            reward_amount,
        ),
        ExecuteMsg::UpdateAchievement {
            achievement_id,
            name,
            description,
            reward_amount,
            active,
        } => execute_update_achievement(
            deps,
            env,
            info,
            achievement_id,
            name,
            description,
            reward_amount,
            active,
        ),
        ExecuteMsg::AwardAchievement {
            player,
            achievement_id,
        } => execute_award_achievement(deps, env, info, player, achievement_id),
        ExecuteMsg::WithdrawTokens { amount, recipient } => {
            execute_withdraw_tokens(deps, env, info, amount, recipient)
        }
        ExecuteMsg::TransferBetweenPlayers { amount, recipient } => {
            execute_transfer_between_players(deps, env, info, amount, recipient)
        }
        ExecuteMsg::AdminTransferBetweenPlayers {
            amount,
            from,
            recipient,
        } => execute_admin_transfer_between_players(deps, env, info, amount, from, recipient),
    }
}

// ─── Execute: Supply & Admins (owner only) ──────────────────────────────────

pub fn execute_initialize_token_supply(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    // Zero is accepted here, unlike withdrawals.
    let total_supply = TOTAL_SUPPLY
        .load(deps.storage)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;
    let owner_balance = credit(deps.storage, &info.sender, amount)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;

    Ok(Response::new()
        .add_attribute("action", "initialize_token_supply")
        .add_attribute("amount", amount.to_string())
        .add_attribute("owner_balance", owner_balance.to_string())
        .add_attribute("total_supply", total_supply.to_string()))
}

pub fn execute_add_game_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let admin_addr = deps.api.addr_validate(&admin)?;
    GAME_ADMINS.save(deps.storage, &admin_addr, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_game_admin")
        .add_attribute("admin", admin_addr.as_str()))
}

pub fn execute_remove_game_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let admin_addr = deps.api.addr_validate(&admin)?;
    // Flag rather than delete; reads the same as "never an admin".
    GAME_ADMINS.save(deps.storage, &admin_addr, &false)?;

    Ok(Response::new()
        .add_attribute("action", "remove_game_admin")
        .add_attribute("admin", admin_addr.as_str()))
}

// ─── Execute: Achievements (admin or owner) ─────────────────────────────────

pub fn execute_add_achievement(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    achievement_id: u64,
    name: String,
    description: String,
    reward_amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin_or_owner(deps.as_ref(), &info.sender)?;

    if ACHIEVEMENTS.has(deps.storage, achievement_id) {
        return Err(ContractError::AchievementExists { achievement_id });
    }

    let achievement = Achievement {
        name,
        description,
        reward_amount,
        active: true,
    };
    ACHIEVEMENTS.save(deps.storage, achievement_id, &achievement)?;

    Ok(Response::new()
        .add_attribute("action", "add_achievement")
        .add_attribute("achievement_id", achievement_id.to_string())
        .add_attribute("name", &achievement.name)
        .add_attribute("reward_amount", reward_amount.to_string())
        .add_attribute("sender", info.sender.as_str()))
}

pub fn execute_update_achievement(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    achievement_id: u64,
    name: String,
    description: String,
    reward_amount: Uint128,
    active: bool,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin_or_owner(deps.as_ref(), &info.sender)?;

    if !ACHIEVEMENTS.has(deps.storage, achievement_id) {
        return Err(ContractError::NotFound { achievement_id });
    }

    let achievement = Achievement {
        name,
        description,
        reward_amount,
        active,
    };
    ACHIEVEMENTS.save(deps.storage, achievement_id, &achievement)?;

    Ok(Response::new()
        .add_attribute("action", "update_achievement")
        .add_attribute("achievement_id", achievement_id.to_string())
        .add_attribute("reward_amount", reward_amount.to_string())
        .add_attribute("active", active.to_string())
        .add_attribute("sender", info.sender.as_str()))
}

/// Check-then-pay: every precondition, including the owner's balance, is
/// verified before the claim record or any balance is written.
pub fn execute_award_achievement(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    player: String,
    achievement_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin_or_owner(deps.as_ref(), &info.sender)?;

    let player_addr = deps.api.addr_validate(&player)?;

    // Inactive achievements are reported exactly like missing ones
    let achievement = load_achievement(deps.as_ref(), achievement_id)?;
    if !achievement.active {
        return Err(ContractError::NotFound { achievement_id });
    }

    if is_claimed(deps.storage, &player_addr, achievement_id)? {
        return Err(ContractError::AlreadyClaimed {
            player: player_addr.to_string(),
            achievement_id,
        });
    }

    // Rewards always come out of the owner's balance, whoever awards
    let owner = CONFIG.load(deps.storage)?.owner;
    move_tokens(
        deps.storage,
        &owner,
        &player_addr,
        achievement.reward_amount,
    )?;
    CLAIMS.save(
        deps.storage,
        (&player_addr, achievement_id),
        &ClaimRecord {
            claimed: true,
            reward_paid: achievement.reward_amount,
            claimed_at: env.block.time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "award_achievement")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("achievement_id", achievement_id.to_string())
        .add_attribute("reward_amount", achievement.reward_amount.to_string())
        .add_attribute("sender", info.sender.as_str()))
}

// ─── Execute: Token Movement ────────────────────────────────────────────────

pub fn execute_withdraw_tokens(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    move_tokens(deps.storage, &info.sender, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "withdraw_tokens")
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient_addr.as_str()))
}

pub fn execute_transfer_between_players(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    move_tokens(deps.storage, &info.sender, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_between_players")
        .add_attribute("amount", amount.to_string())
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", recipient_addr.as_str()))
}

/// Privileged transfer on behalf of `from`. Still bounded by the balance
/// of `from`: ledger balances never go below zero.
pub fn execute_admin_transfer_between_players(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
    from: String,
    recipient: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin_or_owner(deps.as_ref(), &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let from_addr = deps.api.addr_validate(&from)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    move_tokens(deps.storage, &from_addr, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "admin_transfer_between_players")
        .add_attribute("amount", amount.to_string())
        .add_attribute("from", from_addr.as_str())
        .add_attribute("to", recipient_addr.as_str())
        .add_attribute("admin", info.sender.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::TokenInfo {} => query_token_info(deps),
        QueryMsg::TokenBalance { account } => query_token_balance(deps, account),
        QueryMsg::Achievement { achievement_id } => query_achievement(deps, achievement_id),
        QueryMsg::ListAchievements { start_after, limit } => {
            query_list_achievements(deps, start_after, limit)
        }
        QueryMsg::AchievementClaimed {
            player,
            achievement_id,
        } => query_achievement_claimed(deps, player, achievement_id),
        QueryMsg::IsAdmin { account } => query_is_admin(deps, account),
        QueryMsg::ListAdmins { start_after, limit } => {
            query_list_admins(deps, start_after, limit)
        }
        QueryMsg::PlayerStats { player } => query_player_stats(deps, player),
        QueryMsg::PlayerAchievements {
            player,
            start_after,
            limit,
        } => query_player_achievements(deps, player, start_after, limit),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_token_info(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&TokenInfoResponse {
        name: config.token_name,
        symbol: config.token_symbol,
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_token_balance(deps: Deps, account: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&account)?;
    to_json_binary(&BalanceResponse {
        balance: balance_of(deps.storage, &addr)?,
    })
}

pub fn query_achievement(deps: Deps, achievement_id: u64) -> StdResult<Binary> {
    let achievement = ACHIEVEMENTS
        .may_load(deps.storage, achievement_id)?
        .ok_or_else(|| StdError::not_found(format!("achievement {}", achievement_id)))?;
    to_json_binary(&achievement_response(achievement_id, achievement))
}

pub fn query_list_achievements(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let achievements = ACHIEVEMENTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, a)| achievement_response(id, a)))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&AchievementsResponse { achievements })
}

pub fn query_achievement_claimed(
    deps: Deps,
    player: String,
    achievement_id: u64,
) -> StdResult<Binary> {
    let player_addr = deps.api.addr_validate(&player)?;
    to_json_binary(&ClaimedResponse {
        claimed: is_claimed(deps.storage, &player_addr, achievement_id)?,
    })
}

pub fn query_is_admin(deps: Deps, account: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&account)?;
    to_json_binary(&IsAdminResponse {
        is_admin: is_game_admin(deps.storage, &addr)?,
    })
}

pub fn query_list_admins(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let admins = GAME_ADMINS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
        .take(limit)
        .map(|item| item.map(|(addr, _)| addr.to_string()))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&AdminsResponse { admins })
}

pub fn query_player_stats(deps: Deps, player: String) -> StdResult<Binary> {
    let player_addr = deps.api.addr_validate(&player)?;

    let mut achievements_claimed = 0u64;
    let mut total_rewards_earned = Uint128::zero();
    for item in CLAIMS
        .prefix(&player_addr)
        .range(deps.storage, None, None, Order::Ascending)
    {
        let (_, claim) = item?;
        if claim.claimed {
            achievements_claimed += 1;
            total_rewards_earned = total_rewards_earned.checked_add(claim.reward_paid)?;
        }
    }

    to_json_binary(&PlayerStatsResponse {
        token_balance: balance_of(deps.storage, &player_addr)?,
        achievements_claimed,
        total_rewards_earned,
    })
}

pub fn query_player_achievements(
    deps: Deps,
    player: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let player_addr = deps.api.addr_validate(&player)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let claims = CLAIMS
        .prefix(&player_addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(achievement_id, claim)| ClaimInfo {
                achievement_id,
                reward_paid: claim.reward_paid,
                claimed_at: claim.claimed_at,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&PlayerAchievementsResponse { claims })
}

fn achievement_response(achievement_id: u64, achievement: Achievement) -> AchievementResponse {
    AchievementResponse {
        achievement_id,
        name: achievement.name,
        description: achievement.description,
        reward_amount: achievement.reward_amount,
        active: achievement.active,
    }
}

// ─── Migrate ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
