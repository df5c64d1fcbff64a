use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STATE_SEED;
use crate::state::LotteryState;

/// Read-only access to the lottery state. Results travel back through the
/// transaction's return data.
#[derive(Accounts)]
pub struct ViewLottery<'info> {
    #[account(
        seeds = [LOTTERY_STATE_SEED],
        bump = lottery_state.bump,
    )]
    pub lottery_state: Account<'info, LotteryState>,
}

pub fn process_get_players(ctx: Context<ViewLottery>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery_state.players().to_vec())
}

pub fn process_is_paused(ctx: Context<ViewLottery>) -> Result<bool> {
    Ok(ctx.accounts.lottery_state.paused)
}

pub fn process_get_manager(ctx: Context<ViewLottery>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery_state.manager)
}

pub fn process_get_balance(ctx: Context<ViewLottery>, identity: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.lottery_state.balance_of(&identity))
}

pub fn process_check_transaction_by_address(
    ctx: Context<ViewLottery>,
    identity: Pubkey,
) -> Result<bool> {
    Ok(ctx
        .accounts
        .lottery_state
        .check_transaction_by_address(&identity))
}

pub fn process_check_transaction_by_username(
    ctx: Context<ViewLottery>,
    username: String,
) -> Result<bool> {
    Ok(ctx
        .accounts
        .lottery_state
        .check_transaction_by_username(&username))
}
