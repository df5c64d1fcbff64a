use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Moves credited lamports out of escrow to a participant.
pub trait Ledger {
    fn pay_out(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays from the program-owned lottery account, never touching the
/// rent-exempt reserve.
pub struct VaultLedger<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    destination: &'a AccountInfo<'info>,
    reserve: u64,
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    pub fn new(
        vault: &'a AccountInfo<'info>,
        destination: &'a AccountInfo<'info>,
        reserve: u64,
    ) -> Self {
        Self {
            vault,
            destination,
            reserve,
        }
    }

    /// Lamports above the rent-exempt reserve.
    pub fn available(&self) -> u64 {
        self.vault.lamports().saturating_sub(self.reserve)
    }
}

impl Ledger for VaultLedger<'_, '_> {
    fn pay_out(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *self.destination.key,
            *recipient,
            LotteryError::RecipientMismatch
        );
        require!(
            amount <= self.available(),
            LotteryError::InsufficientPoolFunds
        );

        let credited = self
            .destination
            .lamports()
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        **self.vault.try_borrow_mut_lamports()? -= amount;
        **self.destination.try_borrow_mut_lamports()? = credited;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVE: u64 = 1_000;

    #[test]
    fn test_pay_out_moves_lamports() {
        let program_id = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let player_key = Pubkey::new_unique();
        let mut vault_lamports = RESERVE + 500;
        let mut player_lamports = 10;
        let mut vault_data = [0u8; 8];
        let mut player_data = [0u8; 0];
        let system = Pubkey::default();

        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let player = AccountInfo::new(
            &player_key,
            true,
            true,
            &mut player_lamports,
            &mut player_data,
            &system,
            false,
            0,
        );

        let mut ledger = VaultLedger::new(&vault, &player, RESERVE);
        assert_eq!(ledger.available(), 500);
        ledger.pay_out(&player_key, 400).unwrap();

        assert_eq!(vault.lamports(), RESERVE + 100);
        assert_eq!(player.lamports(), 410);
    }

    #[test]
    fn test_pay_out_keeps_rent_reserve() {
        let program_id = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let player_key = Pubkey::new_unique();
        let mut vault_lamports = RESERVE + 500;
        let mut player_lamports = 0;
        let mut vault_data = [0u8; 8];
        let mut player_data = [0u8; 0];
        let system = Pubkey::default();

        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let player = AccountInfo::new(
            &player_key,
            true,
            true,
            &mut player_lamports,
            &mut player_data,
            &system,
            false,
            0,
        );

        let mut ledger = VaultLedger::new(&vault, &player, RESERVE);
        let err = ledger.pay_out(&player_key, 501).unwrap_err();
        assert_eq!(err, LotteryError::InsufficientPoolFunds.into());
        assert_eq!(vault.lamports(), RESERVE + 500);
        assert_eq!(player.lamports(), 0);
    }

    #[test]
    fn test_pay_out_rejects_foreign_destination() {
        let program_id = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let player_key = Pubkey::new_unique();
        let mut vault_lamports = RESERVE + 500;
        let mut player_lamports = 0;
        let mut vault_data = [0u8; 8];
        let mut player_data = [0u8; 0];
        let system = Pubkey::default();

        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &program_id,
            false,
            0,
        );
        let player = AccountInfo::new(
            &player_key,
            true,
            true,
            &mut player_lamports,
            &mut player_data,
            &system,
            false,
            0,
        );

        let mut ledger = VaultLedger::new(&vault, &player, RESERVE);
        let err = ledger.pay_out(&Pubkey::new_unique(), 100).unwrap_err();
        assert_eq!(err, LotteryError::RecipientMismatch.into());
        assert_eq!(vault.lamports(), RESERVE + 500);
    }
}
