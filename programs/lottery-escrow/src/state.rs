use anchor_lang::prelude::*;

use crate::constants::*;
use crate::entropy::EntropySource;
use crate::error::LotteryError;
use crate::ledger::Ledger;

/// Withdrawable credit owed to one participant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct BalanceEntry {
    pub owner: Pubkey,
    pub amount: u64,
}

/// Human-readable name bound to a participant by the manager.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct UsernameEntry {
    #[max_len(32)]
    pub username: String,
    pub identity: Pubkey,
}

/// The single lottery account. It stores the round and the ledger of credits,
/// and its lamports are the escrow backing both.
///
/// Every mutating instruction takes this account as writable, so the runtime
/// serializes them on its write lock.
#[account]
#[derive(InitSpace, Debug)]
pub struct LotteryState {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The privileged account. Set once by `initialize`, never changed.
    pub manager: Pubkey,

    /// When `true`, `enter` is rejected. Nothing else is gated.
    pub paused: bool,

    /// Lamports contributed since the last winner was picked.
    pub pool_amount: u64,

    /// Entrants of the current round, one slot per entry.
    #[max_len(31)]
    pub players: Vec<Pubkey>,

    /// Credited, not yet withdrawn winnings. Entries are never zero.
    #[max_len(64)]
    pub balances: Vec<BalanceEntry>,

    #[max_len(32)]
    pub usernames: Vec<UsernameEntry>,
}

/// Outcome of a successful `pick_winner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningDraw {
    pub winner: Pubkey,
    pub index: usize,
    pub prize: u64,
}

impl LotteryState {
    pub fn new(manager: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            manager,
            paused: false,
            pool_amount: 0,
            players: Vec::new(),
            balances: Vec::new(),
            usernames: Vec::new(),
        }
    }

    fn only_manager(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.manager, LotteryError::Unauthorized);
        Ok(())
    }

    /// Admits one entry for `contributor`. The lamports themselves are moved
    /// into escrow by the caller of this method.
    pub fn enter(&mut self, contributor: Pubkey, amount: u64) -> Result<()> {
        require!(!self.paused, LotteryError::ContractPaused);
        require!(
            amount >= MIN_CONTRIBUTION,
            LotteryError::InsufficientContribution
        );
        require!(self.players.len() < MAX_PLAYERS, LotteryError::LotteryFull);

        let pool_amount = self
            .pool_amount
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        self.players.push(contributor);
        self.pool_amount = pool_amount;
        Ok(())
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players
    }

    pub fn balance_of(&self, identity: &Pubkey) -> u64 {
        self.balances
            .iter()
            .find(|entry| entry.owner == *identity)
            .map_or(0, |entry| entry.amount)
    }

    /// Sum of all credited, unwithdrawn winnings.
    pub fn total_owed(&self) -> Result<u64> {
        self.balances
            .iter()
            .try_fold(0u64, |acc, entry| acc.checked_add(entry.amount))
            .ok_or_else(|| error!(LotteryError::MathOverflow))
    }

    /// True while `identity` is in the current round or still has credit.
    pub fn check_transaction_by_address(&self, identity: &Pubkey) -> bool {
        self.players.contains(identity) || self.balance_of(identity) > 0
    }

    pub fn check_transaction_by_username(&self, username: &str) -> bool {
        self.usernames
            .iter()
            .find(|entry| entry.username == username)
            .is_some_and(|entry| self.check_transaction_by_address(&entry.identity))
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.only_manager(caller)?;
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.only_manager(caller)?;
        self.paused = false;
        Ok(())
    }

    /// Draws one entry, credits it with the whole pool and starts a new round.
    ///
    /// The draw is only as unpredictable as `entropy`. An empty round is
    /// rejected with `NoPlayers`.
    pub fn pick_winner<E>(&mut self, caller: &Pubkey, entropy: &E) -> Result<WinningDraw>
    where
        E: EntropySource + ?Sized,
    {
        self.only_manager(caller)?;
        require!(!self.players.is_empty(), LotteryError::NoPlayers);

        let seed = entropy.seed(caller, &self.players);
        let index = (seed % self.players.len() as u64) as usize;
        let winner = self.players[index];
        let prize = self.pool_amount;

        // The round is only reset once the credit has been applied.
        match self.balances.iter().position(|entry| entry.owner == winner) {
            Some(slot) => {
                let credited = self.balances[slot]
                    .amount
                    .checked_add(prize)
                    .ok_or(LotteryError::MathOverflow)?;
                self.balances[slot].amount = credited;
            }
            None => {
                require!(
                    self.balances.len() < MAX_BALANCES,
                    LotteryError::BalanceTableFull
                );
                self.balances.push(BalanceEntry {
                    owner: winner,
                    amount: prize,
                });
            }
        }

        self.players.clear();
        self.pool_amount = 0;

        Ok(WinningDraw {
            winner,
            index,
            prize,
        })
    }

    /// Pays out the caller's whole credit through `ledger`.
    ///
    /// The credit is zeroed before the ledger is invoked and restored if the
    /// ledger fails, so a payout can never be claimed twice.
    pub fn withdraw<L>(&mut self, caller: &Pubkey, ledger: &mut L) -> Result<u64>
    where
        L: Ledger + ?Sized,
    {
        let slot = self
            .balances
            .iter()
            .position(|entry| entry.owner == *caller && entry.amount > 0)
            .ok_or(LotteryError::NoBalance)?;

        let amount = self.balances[slot].amount;
        self.balances[slot].amount = 0;

        if let Err(err) = ledger.pay_out(caller, amount) {
            self.balances[slot].amount = amount;
            return Err(err);
        }

        self.balances.swap_remove(slot);
        Ok(amount)
    }

    /// Binds `username` to `identity`, replacing any previous binding of the
    /// same name.
    pub fn set_transaction_by_username(
        &mut self,
        caller: &Pubkey,
        username: String,
        identity: Pubkey,
    ) -> Result<()> {
        self.only_manager(caller)?;
        require!(!username.is_empty(), LotteryError::EmptyUsername);
        require!(
            username.len() <= MAX_USERNAME_LEN,
            LotteryError::UsernameTooLong
        );
        require!(
            self.check_transaction_by_address(&identity),
            LotteryError::NotAParticipant
        );

        match self
            .usernames
            .iter_mut()
            .find(|entry| entry.username == username)
        {
            Some(entry) => entry.identity = identity,
            None => {
                require!(
                    self.usernames.len() < MAX_USERNAMES,
                    LotteryError::UsernameTableFull
                );
                self.usernames.push(UsernameEntry { username, identity });
            }
        }
        Ok(())
    }
}
