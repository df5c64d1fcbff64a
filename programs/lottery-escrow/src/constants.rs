use solana_program::native_token::LAMPORTS_PER_SOL;
use solana_program::program::MAX_RETURN_DATA;

/// Seed of the PDA holding both the lottery state and the escrowed lamports.
pub const LOTTERY_STATE_SEED: &[u8] = b"lottery_state";

/// Smallest stake accepted by `enter`: 0.01 SOL.
pub const MIN_CONTRIBUTION: u64 = LAMPORTS_PER_SOL / 100;

// Table bounds. These must match the `max_len` attributes on `LotteryState`.
/// `get_players` returns the round through return data, so a full round
/// (4-byte length prefix plus 32 bytes per entry) must fit in it.
pub const MAX_PLAYERS: usize = (MAX_RETURN_DATA - 4) / 32;
pub const MAX_BALANCES: usize = 64;
pub const MAX_USERNAMES: usize = 32;
pub const MAX_USERNAME_LEN: usize = 32;
