use cosmwasm_std::{Addr, Empty, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use game_economy::contract::{execute, instantiate, migrate, query};
use game_economy::error::ContractError;
use game_economy::msg::*;

fn economy_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

struct Suite {
    app: App,
    code_id: u64,
    contract: Addr,
    owner: Addr,
}

impl Suite {
    fn new() -> Self {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");
        let code_id = app.store_code(economy_contract());
        let contract = app
            .instantiate_contract(
                code_id,
                owner.clone(),
                &InstantiateMsg {
                    owner: owner.to_string(),
                    token_name: "Game Token".to_string(),
                    token_symbol: "GAME".to_string(),
                },
                &[],
                "game-economy",
                Some(owner.to_string()),
            )
            .unwrap();
        Suite {
            app,
            code_id,
            contract,
            owner,
        }
    }

    fn addr(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    fn exec(&mut self, sender: &Addr, msg: ExecuteMsg) -> Result<(), ContractError> {
        self.app
            .execute_contract(sender.clone(), self.contract.clone(), &msg, &[])
            .map(|_| ())
            .map_err(|err| err.downcast::<ContractError>().unwrap())
    }

    fn balance(&self, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.contract,
                &QueryMsg::TokenBalance {
                    account: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn claimed(&self, player: &Addr, achievement_id: u64) -> bool {
        let res: ClaimedResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.contract,
                &QueryMsg::AchievementClaimed {
                    player: player.to_string(),
                    achievement_id,
                },
            )
            .unwrap();
        res.claimed
    }

    fn is_admin(&self, account: &Addr) -> bool {
        let res: IsAdminResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.contract,
                &QueryMsg::IsAdmin {
                    account: account.to_string(),
                },
            )
            .unwrap();
        res.is_admin
    }
}

// ─── Scenarios ──────────────────────────────────────────────────────────────

#[test]
fn mint_award_and_reclaim() {
    let mut suite = Suite::new();
    let owner = suite.owner.clone();
    let admin = suite.addr("admin");
    let player = suite.addr("player");

    // Owner mints 1000
    suite
        .exec(
            &owner,
            ExecuteMsg::InitializeTokenSupply {
                amount: Uint128::new(1000),
            },
        )
        .unwrap();
    assert_eq!(suite.balance(&owner), Uint128::new(1000));

    // Owner registers an achievement, admin awards it
    suite
        .exec(
            &owner,
            ExecuteMsg::AddGameAdmin {
                admin: admin.to_string(),
            },
        )
        .unwrap();
    suite
        .exec(
            &owner,
            ExecuteMsg::AddAchievement {
                achievement_id: 1,
                name: "First Win".to_string(),
                description: "Win your first game".to_string(),
                reward_amount: Uint128::new(100),
            },
        )
        .unwrap();
    suite
        .exec(
            &admin,
            ExecuteMsg::AwardAchievement {
                player: player.to_string(),
                achievement_id: 1,
            },
        )
        .unwrap();
    assert_eq!(suite.balance(&player), Uint128::new(100));
    assert_eq!(suite.balance(&owner), Uint128::new(900));
    assert!(suite.claimed(&player, 1));

    // Re-award is rejected and nothing moves
    let err = suite
        .exec(
            &admin,
            ExecuteMsg::AwardAchievement {
                player: player.to_string(),
                achievement_id: 1,
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyClaimed {
            player: player.to_string(),
            achievement_id: 1,
        }
    );
    assert_eq!(suite.balance(&player), Uint128::new(100));
    assert_eq!(suite.balance(&owner), Uint128::new(900));
}

#[test]
fn non_owner_cannot_add_admin() {
    let mut suite = Suite::new();
    let mallory = suite.addr("mallory");
    let target = suite.addr("target");

    let err = suite
        .exec(
            &mallory,
            ExecuteMsg::AddGameAdmin {
                admin: target.to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::OwnerOnly);
    assert!(!suite.is_admin(&target));
}

#[test]
fn transfer_from_empty_account_fails() {
    let mut suite = Suite::new();
    let sender = suite.addr("sender");
    let recipient = suite.addr("recipient");

    let err = suite
        .exec(
            &sender,
            ExecuteMsg::TransferBetweenPlayers {
                amount: Uint128::new(100),
                recipient: recipient.to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err.code(), Some(1));
    assert_eq!(suite.balance(&sender), Uint128::zero());
    assert_eq!(suite.balance(&recipient), Uint128::zero());
}

#[test]
fn achievement_query_round_trip() {
    let mut suite = Suite::new();
    let owner = suite.owner.clone();
    suite
        .exec(
            &owner,
            ExecuteMsg::AddAchievement {
                achievement_id: 4,
                name: "Champion".to_string(),
                description: "Win 10 games".to_string(),
                reward_amount: Uint128::new(500),
            },
        )
        .unwrap();

    let ach: AchievementResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::Achievement { achievement_id: 4 })
        .unwrap();
    assert_eq!(ach.name, "Champion");
    assert!(ach.active);

    let missing: Result<AchievementResponse, _> = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::Achievement { achievement_id: 5 });
    assert!(missing.is_err());
}

#[test]
fn migrate_preserves_state() {
    let mut suite = Suite::new();
    let owner = suite.owner.clone();
    suite
        .exec(
            &owner,
            ExecuteMsg::InitializeTokenSupply {
                amount: Uint128::new(42),
            },
        )
        .unwrap();

    let contract = suite.contract.clone();
    let code_id = suite.code_id;
    suite
        .app
        .migrate_contract(owner.clone(), contract, &MigrateMsg {}, code_id)
        .unwrap();

    let info: TokenInfoResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::new(42));
    assert_eq!(suite.balance(&owner), Uint128::new(42));
}
