use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("only the contract owner can perform this action")]
    OwnerOnly,

    #[error("achievement {achievement_id} not found")]
    NotFound { achievement_id: u64 },

    #[error("achievement {achievement_id} already exists")]
    AchievementExists { achievement_id: u64 },

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("achievement {achievement_id} already claimed by {player}")]
    AlreadyClaimed { player: String, achievement_id: u64 },

    #[error("insufficient balance in {account}: have {available}, need {requested}")]
    InsufficientBalance {
        account: String,
        available: String,
        requested: String,
    },

    #[error("overflow in arithmetic operation")]
    Overflow,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}

impl ContractError {
    /// Numeric error code used by existing game clients.
    ///
    /// `InsufficientBalance` keeps the bare `1` that peer transfers have
    /// always returned. Host-level failures have no code.
    pub fn code(&self) -> Option<u32> {
        match self {
            ContractError::OwnerOnly => Some(100),
            ContractError::NotFound { .. } => Some(101),
            ContractError::AchievementExists { .. } => Some(102),
            ContractError::Unauthorized { .. } => Some(103),
            ContractError::InvalidAmount => Some(104),
            ContractError::AlreadyClaimed { .. } => Some(105),
            ContractError::InsufficientBalance { .. } => Some(1),
            ContractError::Std(_) | ContractError::Overflow | ContractError::UnexpectedFunds => {
                None
            }
        }
    }
}
