use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;
use crate::state::metadata::{Attribute, METADATA_LEN};

// ──────────────────────────────────────────────────────
// Collection — a named group of assets under one authority
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Collection {
    /// Only this key may mint into the collection
    pub update_authority: Pubkey,

    /// Assets minted so far; also the index of the next asset PDA
    pub num_minted: u64,

    pub name: String,
    pub uri: String,
    pub plugins: Vec<Attribute>,
}

impl Collection {
    pub const LEN: usize = 8   // discriminator
        + 32                    // update_authority
        + 8                     // num_minted
        + METADATA_LEN          // name, uri, plugins
        + 64;                   // padding for future fields

    pub fn authorize_mint(&self, authority: &MintAuthority) -> Result<()> {
        require_keys_eq!(
            authority.key(),
            self.update_authority,
            NftVaultSwapError::CollectionAuthorityMismatch
        );
        Ok(())
    }

    /// Bumps the minted count and returns the index the new asset takes.
    pub fn record_mint(&mut self) -> Result<u64> {
        let index = self.num_minted;
        self.num_minted = index
            .checked_add(1)
            .ok_or(NftVaultSwapError::Overflow)?;
        Ok(index)
    }
}

/// Who is vouching for a mint.
///
/// An explicit `authority` signer is checked as given. When the caller
/// omits it, the payer is taken as the claimed collection authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintAuthority {
    Explicit(Pubkey),
    Payer(Pubkey),
}

impl MintAuthority {
    pub fn resolve(authority: Option<Pubkey>, payer: Pubkey) -> Self {
        match authority {
            Some(key) => MintAuthority::Explicit(key),
            None => MintAuthority::Payer(payer),
        }
    }

    pub fn key(&self) -> Pubkey {
        match self {
            MintAuthority::Explicit(key) | MintAuthority::Payer(key) => *key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    fn collection(update_authority: Pubkey) -> Collection {
        Collection {
            update_authority,
            name: "Genesis".to_string(),
            ..Collection::default()
        }
    }

    #[test]
    fn explicit_authority_is_checked() {
        let authority = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let collection = collection(authority);

        let ok = MintAuthority::resolve(Some(authority), payer);
        assert_eq!(ok, MintAuthority::Explicit(authority));
        collection.authorize_mint(&ok).unwrap();

        let wrong = MintAuthority::resolve(Some(Pubkey::new_unique()), authority);
        assert_error(
            collection.authorize_mint(&wrong),
            NftVaultSwapError::CollectionAuthorityMismatch,
        );
    }

    #[test]
    fn omitted_authority_falls_back_to_payer() {
        let authority = Pubkey::new_unique();
        let collection = collection(authority);

        collection
            .authorize_mint(&MintAuthority::resolve(None, authority))
            .unwrap();
        assert_error(
            collection.authorize_mint(&MintAuthority::resolve(None, Pubkey::new_unique())),
            NftVaultSwapError::CollectionAuthorityMismatch,
        );
    }

    #[test]
    fn record_mint_counts_up_by_one() {
        let mut collection = collection(Pubkey::new_unique());

        assert_eq!(collection.record_mint().unwrap(), 0);
        assert_eq!(collection.record_mint().unwrap(), 1);
        assert_eq!(collection.num_minted, 2);
    }

    #[test]
    fn record_mint_never_wraps() {
        let mut collection = Collection {
            num_minted: u64::MAX,
            ..Collection::default()
        };
        assert_error(collection.record_mint(), NftVaultSwapError::Overflow);
        assert_eq!(collection.num_minted, u64::MAX);
    }
}
