use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_STATE_SEED;
use crate::state::LotteryState;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The entrant, paying the stake.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery state account; also the escrow for the stake.
    #[account(
        mut,
        seeds = [LOTTERY_STATE_SEED],
        bump = lottery_state.bump,
    )]
    pub lottery_state: Account<'info, LotteryState>,

    pub system_program: Program<'info, System>,
}

/// Admits one entry for the signer and escrows `amount` lamports.
///
/// Steps performed:
/// 1. Check the lottery is not paused and the stake meets the minimum.
/// 2. Append the signer to the round and grow the pool.
/// 3. Transfer the stake from the signer to the lottery account.
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.lottery_state.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery_state.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Entry admitted: {}", player);
    msg!("Players: {}", ctx.accounts.lottery_state.players.len());
    msg!("Pool: {}", ctx.accounts.lottery_state.pool_amount);

    Ok(())
}
