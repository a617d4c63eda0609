use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::engine::{self, EscrowKeys, LockParams};
use crate::events::AssetLocked;
use crate::state::asset::Asset;
use crate::state::asset_locker::AssetLocker;
use crate::state::config::ProtocolConfig;
use crate::state::vault::Vault;

// ──────────────────────────────────────────────────────
// Lock NFT — asset owner deposits asset + price
//
// The locker PDA is derived from (asset, depositor). It is
// allocated if missing and checked for an active lock, so a
// duplicate lock reports LockerAlreadyExists.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct LockNft<'info> {
    /// The current asset owner, becoming the depositor
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        has_one = vault,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub asset: Account<'info, Asset>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = AssetLocker::LEN,
        seeds = [AssetLocker::SEED, asset.key().as_ref(), depositor.key().as_ref()],
        bump,
    )]
    pub asset_locker: Account<'info, AssetLocker>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<LockNft>, price: u64) -> Result<()> {
    let clock = Clock::get()?;
    let depositor = ctx.accounts.depositor.key();
    let keys = EscrowKeys {
        asset: ctx.accounts.asset.key(),
        vault: ctx.accounts.vault.key(),
    };

    engine::lock(
        &mut ctx.accounts.asset,
        &mut ctx.accounts.asset_locker,
        &mut ctx.accounts.vault,
        keys,
        LockParams {
            depositor,
            price,
            depositor_lamports: ctx.accounts.depositor.lamports(),
            rent_exempt_minimum: Rent::get()?.minimum_balance(0),
            locked_at: clock.unix_timestamp,
            bump: ctx.bumps.asset_locker,
        },
    )?;

    // ── Transfer the declared price into the vault ──
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, price)?;

    emit!(AssetLocked {
        asset: keys.asset,
        depositor,
        price,
        locked_at: clock.unix_timestamp,
    });

    Ok(())
}
