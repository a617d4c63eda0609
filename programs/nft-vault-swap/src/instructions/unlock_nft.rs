use anchor_lang::prelude::*;

use crate::engine::{self, EscrowKeys};
use crate::events::AssetUnlocked;
use crate::state::asset::Asset;
use crate::state::asset_locker::AssetLocker;
use crate::state::vault::Vault;
use crate::utils::{close_account, pay_from_vault};

// ──────────────────────────────────────────────────────
// Unlock NFT — depositor cancels the lock
//
// Not gated by the config: the depositor can always take
// the asset and price back while the locker is open.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UnlockNft<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub asset: Account<'info, Asset>,

    /// CHECK: Address pinned by seeds; contents read by AssetLocker::load
    /// so that a missing locker surfaces as LockerNotFound.
    #[account(
        mut,
        seeds = [AssetLocker::SEED, asset.key().as_ref(), depositor.key().as_ref()],
        bump,
    )]
    pub asset_locker: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<UnlockNft>) -> Result<()> {
    let clock = Clock::get()?;
    let locker = AssetLocker::load(&ctx.accounts.asset_locker)?;
    let keys = EscrowKeys {
        asset: ctx.accounts.asset.key(),
        vault: ctx.accounts.vault.key(),
    };

    let refund_amount = engine::unlock(
        &mut ctx.accounts.asset,
        &locker,
        &mut ctx.accounts.vault,
        keys,
        &ctx.accounts.depositor.key(),
    )?;

    let depositor_info = ctx.accounts.depositor.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let rent_exempt_minimum = Rent::get()?.minimum_balance(vault_info.data_len());
    pay_from_vault(&vault_info, &depositor_info, refund_amount, rent_exempt_minimum)?;
    close_account(&ctx.accounts.asset_locker.to_account_info(), &depositor_info)?;

    emit!(AssetUnlocked {
        asset: keys.asset,
        depositor: locker.depositor,
        refund_amount,
        unlocked_at: clock.unix_timestamp,
    });

    Ok(())
}
