use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STATE_SEED;
use crate::state::LotteryState;

/// Accounts required to create the lottery. The payer becomes the manager.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation; recorded as manager.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The LotteryState account that stores the round and the credits.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryState::INIT_SPACE,
        seeds = [LOTTERY_STATE_SEED],
        bump
    )]
    pub lottery_state: Box<Account<'info, LotteryState>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts for manager-only instructions. The signer is checked against the
/// stored manager by the state itself, so a stranger gets `Unauthorized`.
#[derive(Accounts)]
pub struct ManageLottery<'info> {
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STATE_SEED],
        bump = lottery_state.bump,
    )]
    pub lottery_state: Account<'info, LotteryState>,
}

/// Initializes the lottery with the signer as its permanent manager.
pub fn process_initialize(ctx: Context<InitializeLottery>) -> Result<()> {
    let manager = ctx.accounts.payer.key();
    ctx.accounts
        .lottery_state
        .set_inner(LotteryState::new(manager, ctx.bumps.lottery_state));

    msg!("Lottery initialized, manager: {}", manager);
    Ok(())
}

pub fn process_pause(ctx: Context<ManageLottery>) -> Result<()> {
    ctx.accounts
        .lottery_state
        .pause(&ctx.accounts.manager.key())?;
    msg!("Contract paused");
    Ok(())
}

pub fn process_unpause(ctx: Context<ManageLottery>) -> Result<()> {
    ctx.accounts
        .lottery_state
        .unpause(&ctx.accounts.manager.key())?;
    msg!("Contract unpaused");
    Ok(())
}

/// Binds `username` to `identity`, which must be in the current round or
/// hold unwithdrawn winnings.
///
/// # Arguments
/// * `ctx` - Context holding the ManageLottery accounts
/// * `username` - Name to bind, 1 to 32 bytes
/// * `identity` - Participant the name refers to
pub fn process_set_transaction_by_username(
    ctx: Context<ManageLottery>,
    username: String,
    identity: Pubkey,
) -> Result<()> {
    ctx.accounts.lottery_state.set_transaction_by_username(
        &ctx.accounts.manager.key(),
        username.clone(),
        identity,
    )?;
    msg!("Username {} bound to {}", username, identity);
    Ok(())
}
