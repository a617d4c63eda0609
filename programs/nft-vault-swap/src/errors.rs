use anchor_lang::prelude::*;

#[error_code]
pub enum NftVaultSwapError {
    // ── Protocol config errors ──
    #[msg("Protocol config has already been initialized")]
    AlreadyInitialized,

    #[msg("Signer does not hold the required authority")]
    Unauthorized,

    #[msg("Admin cannot be handed to the default key")]
    InvalidAdmin,

    // ── Metadata errors ──
    #[msg("Signer is not the update authority of the collection")]
    CollectionAuthorityMismatch,

    #[msg("Name, uri or plugin attributes exceed the allowed size")]
    InvalidMetadata,

    #[msg("Asset is not held by the vault or does not match the locker")]
    InvalidAsset,

    #[msg("The vault cannot be given an asset outside a lock")]
    InvalidOwner,

    // ── Escrow errors ──
    #[msg("Lock price must be greater than zero")]
    InvalidPrice,

    #[msg("Asset is already locked by this depositor")]
    LockerAlreadyExists,

    #[msg("No active locker for this asset and depositor")]
    LockerNotFound,

    #[msg("Depositor cannot swap their own locked asset")]
    SelfSwap,

    // ── Funds errors ──
    #[msg("Depositor cannot cover the declared price")]
    InsufficientFunds,

    #[msg("Vault does not hold enough lamports for this release")]
    VaultUnderfunded,

    #[msg("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_asset_covers_both_causes() {
        assert_eq!(
            NftVaultSwapError::InvalidAsset.to_string(),
            "Asset is not held by the vault or does not match the locker"
        );
    }
}
