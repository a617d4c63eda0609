use anchor_lang::prelude::*;

use crate::engine::{self, EscrowKeys};
use crate::events::AssetSwapped;
use crate::state::asset::Asset;
use crate::state::asset_locker::AssetLocker;
use crate::state::config::ProtocolConfig;
use crate::state::vault::Vault;
use crate::utils::{close_account, pay_from_vault};

// ──────────────────────────────────────────────────────
// Swap NFT — any non-depositor takes the locked asset
//
// The depositor is paid price - fee (floored at zero) from
// the escrowed lamports; the fee share stays in the vault.
// The fee is read from the config inside this transaction.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct SwapNft<'info> {
    /// The new owner of the asset
    pub buyer: Signer<'info>,

    /// The depositor — receives the payout and the locker rent
    #[account(mut)]
    pub old_owner: SystemAccount<'info>,

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

    /// CHECK: Address pinned by seeds; contents read by AssetLocker::load
    /// so that a missing locker surfaces as LockerNotFound.
    #[account(
        mut,
        seeds = [AssetLocker::SEED, asset.key().as_ref(), old_owner.key().as_ref()],
        bump,
    )]
    pub asset_locker: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SwapNft>) -> Result<()> {
    let clock = Clock::get()?;
    let locker = AssetLocker::load(&ctx.accounts.asset_locker)?;
    let buyer = ctx.accounts.buyer.key();
    let keys = EscrowKeys {
        asset: ctx.accounts.asset.key(),
        vault: ctx.accounts.vault.key(),
    };

    let settlement = engine::swap(
        &mut ctx.accounts.asset,
        &locker,
        &mut ctx.accounts.vault,
        keys,
        buyer,
        ctx.accounts.config.fee,
    )?;

    let old_owner_info = ctx.accounts.old_owner.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let rent_exempt_minimum = Rent::get()?.minimum_balance(vault_info.data_len());
    pay_from_vault(&vault_info, &old_owner_info, settlement.payout, rent_exempt_minimum)?;
    close_account(&ctx.accounts.asset_locker.to_account_info(), &old_owner_info)?;

    emit!(AssetSwapped {
        asset: keys.asset,
        old_owner: locker.depositor,
        new_owner: buyer,
        price: settlement.price,
        payout: settlement.payout,
        fee_retained: settlement.fee_retained,
        swapped_at: clock.unix_timestamp,
    });

    Ok(())
}
