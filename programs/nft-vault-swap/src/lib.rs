use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("GBcsuNXsnyD6QhLQoHHaCfBpePQALzBE5qUCHYbdc9ap");

#[program]
pub mod nft_vault_swap {
    use super::*;

    // ──────────────────────────────────────────────────────
    // PROTOCOL ADMIN
    // ──────────────────────────────────────────────────────

    /// Initialize the protocol config and vault. Called once by the deployer,
    /// who becomes the admin.
    pub fn initialize_protocol_config(
        ctx: Context<InitializeProtocolConfig>,
        fee: u64,
    ) -> Result<()> {
        instructions::initialize_config::handler(ctx, fee)
    }

    /// Replace the flat swap fee. Admin only.
    pub fn set_fee(ctx: Context<UpdateProtocolConfig>, fee: u64) -> Result<()> {
        instructions::update_config::set_fee_handler(ctx, fee)
    }

    /// Hand the admin role to another key. Admin only.
    pub fn transfer_admin(ctx: Context<UpdateProtocolConfig>, new_admin: Pubkey) -> Result<()> {
        instructions::update_config::transfer_admin_handler(ctx, new_admin)
    }

    // ──────────────────────────────────────────────────────
    // COLLECTIONS & ASSETS
    // ──────────────────────────────────────────────────────

    pub fn create_collection(
        ctx: Context<CreateCollection>,
        args: CreateCollectionArgs,
    ) -> Result<()> {
        instructions::create_collection::handler(ctx, args)
    }

    /// Mint an asset into a collection. Collection authority only.
    pub fn mint_nft(ctx: Context<MintNft>, args: MintNftArgs) -> Result<()> {
        instructions::mint_nft::handler(ctx, args)
    }

    // ──────────────────────────────────────────────────────
    // ESCROW & SWAP
    // ──────────────────────────────────────────────────────

    /// Move an owned asset and `price` lamports into the vault.
    pub fn lock_nft(ctx: Context<LockNft>, price: u64) -> Result<()> {
        instructions::lock_nft::handler(ctx, price)
    }

    /// Depositor takes back the asset and the escrowed price.
    pub fn unlock_nft(ctx: Context<UnlockNft>) -> Result<()> {
        instructions::unlock_nft::handler(ctx)
    }

    /// Buyer takes the asset; the depositor is paid price minus the fee.
    pub fn swap_nft(ctx: Context<SwapNft>) -> Result<()> {
        instructions::swap_nft::handler(ctx)
    }
}
