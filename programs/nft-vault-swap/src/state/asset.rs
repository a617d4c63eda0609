use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;
use crate::state::metadata::{Attribute, METADATA_LEN};

// ──────────────────────────────────────────────────────
// Asset — one collectible, PDA derived from collection + index
//
// While locked, `owner` is the vault PDA.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Asset {
    pub collection: Pubkey,
    pub owner: Pubkey,

    /// Copied from the collection at mint, not from the holder
    pub update_authority: Pubkey,

    /// Position within the collection
    pub index: u64,

    pub name: String,
    pub uri: String,
    pub plugins: Vec<Attribute>,

    pub bump: u8,
}

impl Asset {
    pub const LEN: usize = 8   // discriminator
        + 32 * 3                // collection, owner, update_authority
        + 8                     // index
        + METADATA_LEN          // name, uri, plugins
        + 1                     // bump
        + 64;                   // padding for future fields

    pub const SEED: &'static [u8] = b"asset";

    pub fn address(collection: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, collection.as_ref(), index.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    /// Owner of a fresh mint: the requested key or the payer. The vault
    /// only ever holds an asset through a locker, so it is refused here.
    pub fn resolve_owner(requested: Option<Pubkey>, payer: Pubkey, vault: &Pubkey) -> Result<Pubkey> {
        let owner = requested.unwrap_or(payer);
        require_keys_neq!(owner, *vault, NftVaultSwapError::InvalidOwner);
        Ok(owner)
    }

    pub fn ensure_owner(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *key, NftVaultSwapError::Unauthorized);
        Ok(())
    }

    pub fn is_held_by(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn transfer_to(&mut self, new_owner: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.owner, new_owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::vault::Vault;
    use crate::test_utils::assert_error;

    #[test]
    fn mint_owner_defaults_to_payer() {
        let payer = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();

        assert_eq!(Asset::resolve_owner(None, payer, &vault).unwrap(), payer);
        assert_eq!(
            Asset::resolve_owner(Some(receiver), payer, &vault).unwrap(),
            receiver
        );
    }

    #[test]
    fn mint_owner_cannot_be_vault() {
        let (vault, _) = Vault::address();

        let result = Asset::resolve_owner(Some(vault), Pubkey::new_unique(), &vault);

        assert_error(result, NftVaultSwapError::InvalidOwner);
    }

    #[test]
    fn transfer_returns_previous_owner() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut asset = Asset {
            owner: alice,
            ..Asset::default()
        };

        assert_eq!(asset.transfer_to(bob), alice);
        asset.ensure_owner(&bob).unwrap();
        assert_error(asset.ensure_owner(&alice), NftVaultSwapError::Unauthorized);
    }
}
