//! Lottery escrow: entrants stake at least 0.01 SOL into a single program
//! account, the manager draws one winner who is credited with the whole pool,
//! and winners pull their credit out with `withdraw`.
//!
//! Winner selection uses clock-derived entropy and is not verifiably fair.

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod entropy;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;

declare_id!("CC2PzHuKADAUuZ8BMUF3choURB1hcvyQHarsCciiiGGs");

#[program]
pub mod lottery_escrow {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn pick_winner(ctx: Context<ManageLottery>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        process_withdraw(ctx)
    }

    pub fn pause(ctx: Context<ManageLottery>) -> Result<()> {
        process_pause(ctx)
    }

    pub fn unpause(ctx: Context<ManageLottery>) -> Result<()> {
        process_unpause(ctx)
    }

    pub fn set_transaction_by_username(
        ctx: Context<ManageLottery>,
        username: String,
        identity: Pubkey,
    ) -> Result<()> {
        process_set_transaction_by_username(ctx, username, identity)
    }

    pub fn get_players(ctx: Context<ViewLottery>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn is_paused(ctx: Context<ViewLottery>) -> Result<bool> {
        process_is_paused(ctx)
    }

    pub fn get_manager(ctx: Context<ViewLottery>) -> Result<Pubkey> {
        process_get_manager(ctx)
    }

    pub fn get_balance(ctx: Context<ViewLottery>, identity: Pubkey) -> Result<u64> {
        process_get_balance(ctx, identity)
    }

    pub fn check_transaction_by_address(
        ctx: Context<ViewLottery>,
        identity: Pubkey,
    ) -> Result<bool> {
        process_check_transaction_by_address(ctx, identity)
    }

    pub fn check_transaction_by_username(
        ctx: Context<ViewLottery>,
        username: String,
    ) -> Result<bool> {
        process_check_transaction_by_username(ctx, username)
    }
}
