use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Only the manager can call this function.")]
    Unauthorized,
    #[msg("Contract is paused")]
    ContractPaused,
    #[msg("Minimum contribution is 0.01 SOL.")]
    InsufficientContribution,
    #[msg("No withdrawable balance for this user")]
    NoBalance,
    #[msg("No players in the current round")]
    NoPlayers,
    #[msg("The current round has reached its player limit")]
    LotteryFull,
    #[msg("Balance table is full")]
    BalanceTableFull,
    #[msg("Username table is full")]
    UsernameTableFull,
    #[msg("Username too long (max 32 bytes)")]
    UsernameTooLong,
    #[msg("Username must not be empty")]
    EmptyUsername,
    #[msg("Identity has no entry in the lottery")]
    NotAParticipant,
    #[msg("Escrow does not hold enough lamports for this payout")]
    InsufficientPoolFunds,
    #[msg("Payout destination does not match the withdrawing account")]
    RecipientMismatch,
    #[msg("Math overflow")]
    MathOverflow,
}
