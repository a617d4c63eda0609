use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;
use crate::events::{AdminTransferred, FeeUpdated};
use crate::state::config::ProtocolConfig;

// ──────────────────────────────────────────────────────
// Update Protocol Config — admin only
//
// set_fee replaces the flat swap fee; a swap executing
// after this lands pays the new fee. transfer_admin hands
// the role to another key.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateProtocolConfig<'info> {
    /// The current admin
    #[account(
        constraint = admin.key() == config.admin @ NftVaultSwapError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// The protocol config PDA
    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

pub fn set_fee_handler(ctx: Context<UpdateProtocolConfig>, fee: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_fee = ctx.accounts.config.set_fee(&admin, fee)?;

    msg!("Protocol fee updated from {} to {}", old_fee, fee);

    emit!(FeeUpdated {
        admin,
        old_fee,
        new_fee: fee,
    });

    Ok(())
}

pub fn transfer_admin_handler(ctx: Context<UpdateProtocolConfig>, new_admin: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_admin = ctx.accounts.config.transfer_admin(&admin, new_admin)?;

    msg!(
        "Admin authority transferred from {} to {}",
        old_admin,
        new_admin
    );

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });

    Ok(())
}
