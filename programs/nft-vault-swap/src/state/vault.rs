use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;

// ──────────────────────────────────────────────────────
// Vault — singleton PDA, temporary owner of locked assets
//
// Lamports held = rent minimum + escrowed + fees_accrued.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Vault {
    /// Sum of declared prices across all active lockers
    pub escrowed: u64,

    /// Protocol fees retained by completed swaps
    pub fees_accrued: u64,

    /// PDA bump
    pub bump: u8,
}

impl Vault {
    pub const LEN: usize = 8   // discriminator
        + 8                     // escrowed
        + 8                     // fees_accrued
        + 1                     // bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"vault";

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED], &crate::ID)
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.escrowed = self
            .escrowed
            .checked_add(amount)
            .ok_or(NftVaultSwapError::Overflow)?;
        Ok(())
    }

    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.escrowed = self
            .escrowed
            .checked_sub(amount)
            .ok_or(NftVaultSwapError::VaultUnderfunded)?;
        Ok(())
    }

    /// Releases `price` from escrow, keeping the fee share as protocol float.
    pub fn settle(&mut self, price: u64, fee: u64) -> Result<Settlement> {
        let settlement = Settlement::new(price, fee);
        let fees_accrued = self
            .fees_accrued
            .checked_add(settlement.fee_retained)
            .ok_or(NftVaultSwapError::Overflow)?;
        self.release(price)?;
        self.fees_accrued = fees_accrued;
        Ok(settlement)
    }
}

/// How a swapped price is split between depositor and protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub price: u64,
    pub payout: u64,
    pub fee_retained: u64,
}

impl Settlement {
    /// The fee saturates at the price: a fee at or above the price leaves
    /// the depositor with nothing and the protocol with the whole price.
    pub fn new(price: u64, fee: u64) -> Self {
        let payout = price.saturating_sub(fee);
        Self {
            price,
            payout,
            fee_retained: price - payout,
        }
    }
}
