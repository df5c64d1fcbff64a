use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STATE_SEED;
use crate::ledger::VaultLedger;
use crate::state::LotteryState;

/// Accounts required to withdraw credited winnings.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The participant claiming their credit; receives the lamports.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery state account holding the escrowed lamports.
    #[account(
        mut,
        seeds = [LOTTERY_STATE_SEED],
        bump = lottery_state.bump,
    )]
    pub lottery_state: Account<'info, LotteryState>,
}

/// Pays the signer's whole credit out of escrow.
///
/// The credit is cleared before lamports move and restored if the payout
/// fails, so a second withdrawal without a new win fails with `NoBalance`.
pub fn process_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let player = ctx.accounts.player.key();
    let vault = ctx.accounts.lottery_state.to_account_info();
    let destination = ctx.accounts.player.to_account_info();
    let reserve = Rent::get()?.minimum_balance(vault.data_len());

    let mut ledger = VaultLedger::new(&vault, &destination, reserve);
    let amount = ctx.accounts.lottery_state.withdraw(&player, &mut ledger)?;

    msg!("Withdrawn {} lamports to {}", amount, player);

    Ok(())
}
