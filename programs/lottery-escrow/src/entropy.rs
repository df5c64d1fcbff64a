use anchor_lang::prelude::*;
use solana_program::keccak;

/// Supplies the seed a winner index is derived from.
pub trait EntropySource {
    fn seed(&self, caller: &Pubkey, players: &[Pubkey]) -> u64;
}

/// Seed derived from the clock sysvar, the caller and the round's entrants.
///
/// This is not a verifiable random function. The slot leader can predict the
/// seed and the manager can bias it by choosing when `pick_winner` lands.
#[derive(Clone, Copy, Debug)]
pub struct ClockEntropy {
    slot: u64,
    unix_timestamp: i64,
}

impl ClockEntropy {
    pub fn new(slot: u64, unix_timestamp: i64) -> Self {
        Self {
            slot,
            unix_timestamp,
        }
    }

    pub fn from_clock(clock: &Clock) -> Self {
        Self::new(clock.slot, clock.unix_timestamp)
    }
}

impl EntropySource for ClockEntropy {
    fn seed(&self, caller: &Pubkey, players: &[Pubkey]) -> u64 {
        let slot = self.slot.to_le_bytes();
        let timestamp = self.unix_timestamp.to_le_bytes();
        let pool_size = (players.len() as u64).to_le_bytes();

        let mut chunks: Vec<&[u8]> = Vec::with_capacity(players.len() + 4);
        chunks.push(&slot);
        chunks.push(&timestamp);
        chunks.push(caller.as_ref());
        chunks.push(&pool_size);
        chunks.extend(players.iter().map(|player| player.as_ref()));

        let digest = keccak::hashv(&chunks).to_bytes();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_inputs_give_same_seed() {
        let caller = Pubkey::new_unique();
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let entropy = ClockEntropy::new(42, 1_700_000_000);

        assert_eq!(
            entropy.seed(&caller, &players),
            entropy.seed(&caller, &players)
        );
    }

    #[test]
    fn test_seed_depends_on_every_input() {
        let caller = Pubkey::new_unique();
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let base = ClockEntropy::new(42, 1_700_000_000).seed(&caller, &players);

        assert_ne!(
            base,
            ClockEntropy::new(43, 1_700_000_000).seed(&caller, &players)
        );
        assert_ne!(
            base,
            ClockEntropy::new(42, 1_700_000_001).seed(&caller, &players)
        );
        assert_ne!(
            base,
            ClockEntropy::new(42, 1_700_000_000).seed(&Pubkey::new_unique(), &players)
        );
        assert_ne!(
            base,
            ClockEntropy::new(42, 1_700_000_000).seed(&caller, &players[..1])
        );
    }

    #[test]
    fn test_from_clock_uses_slot_and_timestamp() {
        let clock = Clock {
            slot: 7,
            epoch_start_timestamp: 0,
            epoch: 1,
            leader_schedule_epoch: 1,
            unix_timestamp: 99,
        };
        let caller = Pubkey::new_unique();
        let players = [caller];

        assert_eq!(
            ClockEntropy::from_clock(&clock).seed(&caller, &players),
            ClockEntropy::new(7, 99).seed(&caller, &players)
        );
    }
}
