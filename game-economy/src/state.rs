use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Sole authority for minting, admin management and withdrawals. Never changes.
    pub owner: Addr,
    pub token_name: String,
    pub token_symbol: String,
}

/// A reward-bearing milestone registered by the owner or a game admin
#[cw_serde]
pub struct Achievement {
    pub name: String,
    pub description: String,
    /// Tokens moved from the owner to the player on award
    pub reward_amount: Uint128,
    /// Inactive achievements cannot be awarded
    pub active: bool,
}

/// Per-(player, achievement) claim state. Written once, never reset.
#[cw_serde]
pub struct ClaimRecord {
    pub claimed: bool,
    /// Reward actually paid at award time (the achievement may be updated later)
    pub reward_paid: Uint128,
    pub claimed_at: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Sum of all balances. Only minting changes it.
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// account -> token balance (absent = 0)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// account -> active admin flag. Removal stores `false` instead of deleting.
pub const GAME_ADMINS: Map<&Addr, bool> = Map::new("game_admins");

/// achievement_id -> Achievement
pub const ACHIEVEMENTS: Map<u64, Achievement> = Map::new("achievements");

/// (player, achievement_id) -> ClaimRecord
pub const CLAIMS: Map<(&Addr, u64), ClaimRecord> = Map::new("claims");
