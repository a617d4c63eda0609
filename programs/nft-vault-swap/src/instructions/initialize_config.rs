use anchor_lang::prelude::*;

use crate::events::ProtocolInitialized;
use crate::state::config::ProtocolConfig;
use crate::state::vault::Vault;

// ──────────────────────────────────────────────────────
// Initialize Protocol Config — called once by deployer
//
// Creates the singleton ProtocolConfig PDA and the vault
// PDA. The signer becomes the admin.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitializeProtocolConfig<'info> {
    /// The deployer/admin initializing the protocol
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The protocol config PDA — singleton, derived from a fixed seed.
    /// Loaded if it already exists so a second call reports AlreadyInitialized.
    #[account(
        init_if_needed,
        payer = admin,
        space = ProtocolConfig::LEN,
        seeds = [ProtocolConfig::SEED],
        bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// The vault PDA — custody of locked assets and escrowed lamports
    #[account(
        init_if_needed,
        payer = admin,
        space = Vault::LEN,
        seeds = [Vault::SEED],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeProtocolConfig>, fee: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let vault_key = ctx.accounts.vault.key();
    let config = &mut ctx.accounts.config;
    config.initialize(admin, vault_key, fee, ctx.bumps.config)?;

    let vault = &mut ctx.accounts.vault;
    vault.bump = ctx.bumps.vault;

    msg!(
        "Protocol initialized: admin={}, vault={}, fee={}",
        config.admin,
        config.vault,
        config.fee
    );

    emit!(ProtocolInitialized {
        admin: config.admin,
        vault: config.vault,
        fee,
    });

    Ok(())
}
