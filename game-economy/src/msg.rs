use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Permanent owner of the economy
    pub owner: String,
    pub token_name: String,
    pub token_symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `amount` tokens into the owner's balance (owner only)
    InitializeTokenSupply { amount: Uint128 },
    /// Grant game-admin rights (owner only)
    AddGameAdmin { admin: String },
    /// Revoke game-admin rights (owner only)
    RemoveGameAdmin { admin: String },
    /// Register a new, active achievement (admin or owner)
    AddAchievement {
        achievement_id: u64,
        name: String,
        description: String,
        reward_amount: Uint128,
    },
    /// Replace every field of an existing achievement (admin or owner)
    UpdateAchievement {
        achievement_id: u64,
        name: String,
        description: String,
        reward_amount: Uint128,
        active: bool,
    },
    /// Award an active achievement once per player, paying the reward from the owner
    AwardAchievement { player: String, achievement_id: u64 },
    /// Move tokens from the owner's balance to `recipient` (owner only)
    WithdrawTokens { amount: Uint128, recipient: String },
    /// Move tokens from the sender's own balance to `recipient`
    TransferBetweenPlayers { amount: Uint128, recipient: String },
    /// Move tokens between two players on their behalf (admin or owner)
    AdminTransferBetweenPlayers {
        amount: Uint128,
        from: String,
        recipient: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Token name, symbol and total minted supply
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Balance of an account (zero if it never held tokens)
    #[returns(BalanceResponse)]
    TokenBalance { account: String },
    /// Fails with a plain not-found error (no legacy code) if the achievement
    /// was never registered
    #[returns(AchievementResponse)]
    Achievement { achievement_id: u64 },
    #[returns(AchievementsResponse)]
    ListAchievements {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ClaimedResponse)]
    AchievementClaimed { player: String, achievement_id: u64 },
    #[returns(IsAdminResponse)]
    IsAdmin { account: String },
    /// Currently active admins only
    #[returns(AdminsResponse)]
    ListAdmins {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(PlayerStatsResponse)]
    PlayerStats { player: String },
    /// Claims held by a player, ascending by achievement id
    #[returns(PlayerAchievementsResponse)]
    PlayerAchievements {
        player: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AchievementResponse {
    pub achievement_id: u64,
    pub name: String,
    pub description: String,
    pub reward_amount: Uint128,
    pub active: bool,
}

#[cw_serde]
pub struct AchievementsResponse {
    pub achievements: Vec<AchievementResponse>,
}

#[cw_serde]
pub struct ClaimedResponse {
    pub claimed: bool,
}

#[cw_serde]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

#[cw_serde]
pub struct AdminsResponse {
    pub admins: Vec<String>,
}

#[cw_serde]
pub struct PlayerStatsResponse {
    pub token_balance: Uint128,
    pub achievements_claimed: u64,
    pub total_rewards_earned: Uint128,
}

#[cw_serde]
pub struct ClaimInfo {
    pub achievement_id: u64,
    pub reward_paid: Uint128,
    pub claimed_at: Timestamp,
}

#[cw_serde]
pub struct PlayerAchievementsResponse {
    pub claims: Vec<ClaimInfo>,
}

#[cw_serde]
pub struct MigrateMsg {}
