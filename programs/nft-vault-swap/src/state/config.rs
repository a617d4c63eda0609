use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;

// ──────────────────────────────────────────────────────
// Protocol Config — singleton PDA, initialized once by admin
//
// Stores the flat swap fee, the admin authority, and the
// address of the vault every fund-moving instruction checks.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct ProtocolConfig {
    /// The admin authority — can change the fee and hand over the role
    pub admin: Pubkey,

    /// The vault PDA holding escrowed lamports
    pub vault: Pubkey,

    /// Flat fee in lamports retained on every swap
    pub fee: u64,

    /// PDA bump
    pub bump: u8,
}

impl ProtocolConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // admin
        + 32                    // vault
        + 8                     // fee
        + 1                     // bump
        + 64;                   // padding for future fields

    /// The PDA seed — only one config account per program
    pub const SEED: &'static [u8] = b"protocol_config";

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED], &crate::ID)
    }

    /// A freshly allocated config has no admin yet.
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    /// Fills a freshly allocated config. A second call is rejected.
    pub fn initialize(&mut self, admin: Pubkey, vault: Pubkey, fee: u64, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), NftVaultSwapError::AlreadyInitialized);
        self.admin = admin;
        self.vault = vault;
        self.fee = fee;
        self.bump = bump;
        Ok(())
    }

    pub fn ensure_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.admin, NftVaultSwapError::Unauthorized);
        Ok(())
    }

    /// Replaces the fee and returns the previous one.
    pub fn set_fee(&mut self, signer: &Pubkey, fee: u64) -> Result<u64> {
        self.ensure_admin(signer)?;
        Ok(std::mem::replace(&mut self.fee, fee))
    }

    pub fn transfer_admin(&mut self, signer: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.ensure_admin(signer)?;
        require_keys_neq!(new_admin, Pubkey::default(), NftVaultSwapError::InvalidAdmin);
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    fn config(admin: Pubkey, fee: u64) -> ProtocolConfig {
        ProtocolConfig {
            admin,
            vault: Pubkey::new_unique(),
            fee,
            bump: 255,
        }
    }

    #[test]
    fn admin_can_set_fee() {
        let admin = Pubkey::new_unique();
        let mut config = config(admin, 100);

        let old = config.set_fee(&admin, 250).unwrap();

        assert_eq!(old, 100);
        assert_eq!(config.fee, 250);
    }

    #[test]
    fn non_admin_cannot_set_fee() {
        let admin = Pubkey::new_unique();
        let mut config = config(admin, 100);

        let result = config.set_fee(&Pubkey::new_unique(), 1);

        assert_error(result, NftVaultSwapError::Unauthorized);
        assert_eq!(config.fee, 100);
    }

    #[test]
    fn transfer_admin_moves_fee_authority() {
        let admin = Pubkey::new_unique();
        let successor = Pubkey::new_unique();
        let mut config = config(admin, 100);

        config.transfer_admin(&admin, successor).unwrap();

        assert_error(config.set_fee(&admin, 5), NftVaultSwapError::Unauthorized);
        config.set_fee(&successor, 5).unwrap();
        assert_eq!(config.fee, 5);
    }

    #[test]
    fn transfer_admin_rejects_default_key() {
        let admin = Pubkey::new_unique();
        let mut config = config(admin, 100);

        assert_error(
            config.transfer_admin(&admin, Pubkey::default()),
            NftVaultSwapError::InvalidAdmin,
        );
        assert_eq!(config.admin, admin);
    }

    #[test]
    fn second_initialize_is_rejected() {
        let admin = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mut config = ProtocolConfig::default();

        config.initialize(admin, vault, 100, 254).unwrap();
        let again = config.initialize(Pubkey::new_unique(), vault, 1, 254);

        assert_error(again, NftVaultSwapError::AlreadyInitialized);
        assert_eq!(config.admin, admin);
        assert_eq!(config.fee, 100);
    }

    #[test]
    fn default_config_is_uninitialized() {
        assert!(!ProtocolConfig::default().is_initialized());
        assert!(config(Pubkey::new_unique(), 0).is_initialized());
    }
}
