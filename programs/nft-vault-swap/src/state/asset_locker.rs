use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;

// ──────────────────────────────────────────────────────
// Asset Locker — one per (asset, depositor) while escrowed
//
// PDA seeds make a second locker for the same pair impossible.
// A zeroed account (fresh allocation) is an inactive locker.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct AssetLocker {
    /// Paid on swap, refunded on unlock
    pub depositor: Pubkey,
    pub asset: Pubkey,

    /// Declared price, fixed at lock time
    pub price: u64,
    pub locked_at: i64,

    pub bump: u8,
}

impl AssetLocker {
    pub const LEN: usize = 8   // discriminator
        + 32                    // depositor
        + 32                    // asset
        + 8                     // price
        + 8                     // locked_at
        + 1                     // bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"asset_locker";

    pub fn address(asset: &Pubkey, depositor: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, asset.as_ref(), depositor.as_ref()],
            &crate::ID,
        )
    }

    pub fn is_active(&self) -> bool {
        self.asset != Pubkey::default()
    }

    /// Reads an active locker, mapping a missing or closed account to
    /// `LockerNotFound`.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(NftVaultSwapError::LockerNotFound);
        }

        let data = info.try_borrow_data()?;
        let locker = Self::try_deserialize(&mut &data[..])?;
        require!(locker.is_active(), NftVaultSwapError::LockerNotFound);
        Ok(locker)
    }
}
