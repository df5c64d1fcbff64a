use anchor_lang::prelude::*;

use crate::entropy::ClockEntropy;
use crate::instructions::admin::ManageLottery;

/// Draws the winner of the current round and credits the pool to them.
///
/// Only the manager may call this. The winner index comes from the clock
/// sysvar, so it is best-effort only; see `ClockEntropy`.
pub fn process_pick_winner(ctx: Context<ManageLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let manager = ctx.accounts.manager.key();
    let entropy = ClockEntropy::from_clock(&clock);

    let draw = ctx
        .accounts
        .lottery_state
        .pick_winner(&manager, &entropy)?;

    msg!("Current slot: {}", clock.slot);
    msg!("Winning index: {}", draw.index);
    msg!("Winner: {}", draw.winner);
    msg!("Credited: {}", draw.prize);

    Ok(())
}
