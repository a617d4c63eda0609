use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::NftVaultSwapError;

/// A key/value plugin entry attached to a collection or asset.
/// Opaque to the custody engine.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub const LEN: usize = 4 + MAX_ATTRIBUTE_KEY_LEN + 4 + MAX_ATTRIBUTE_VALUE_LEN;
}

/// Space reserved for name, uri and the plugin list.
pub const METADATA_LEN: usize = 4 + MAX_NAME_LEN   // name
    + 4 + MAX_URI_LEN                               // uri
    + 4 + MAX_PLUGINS * Attribute::LEN;             // plugins

pub fn validate_metadata(name: &str, uri: &str, plugins: &[Attribute]) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LEN,
        NftVaultSwapError::InvalidMetadata
    );
    require!(uri.len() <= MAX_URI_LEN, NftVaultSwapError::InvalidMetadata);
    require!(plugins.len() <= MAX_PLUGINS, NftVaultSwapError::InvalidMetadata);

    for attribute in plugins {
        require!(
            !attribute.key.is_empty() && attribute.key.len() <= MAX_ATTRIBUTE_KEY_LEN,
            NftVaultSwapError::InvalidMetadata
        );
        require!(
            attribute.value.len() <= MAX_ATTRIBUTE_VALUE_LEN,
            NftVaultSwapError::InvalidMetadata
        );
    }

    Ok(())
}
