//! Lock, unlock and swap as plain state transitions.
//!
//! Every function validates first and mutates after, so an `Err` leaves
//! the passed-in accounts untouched. Instruction handlers wrap these with
//! the lamport movements and account creation/closing.

use anchor_lang::prelude::*;

use crate::errors::NftVaultSwapError;
use crate::state::{Asset, AssetLocker, Settlement, Vault};

/// Addresses of the two accounts custody is checked against.
#[derive(Clone, Copy, Debug)]
pub struct EscrowKeys {
    pub asset: Pubkey,
    pub vault: Pubkey,
}

pub struct LockParams {
    pub depositor: Pubkey,
    pub price: u64,
    /// Lamports the depositor holds, after paying locker rent
    pub depositor_lamports: u64,
    /// Floor a non-empty system account must keep
    pub rent_exempt_minimum: u64,
    pub locked_at: i64,
    pub bump: u8,
}

pub fn lock(
    asset: &mut Asset,
    locker: &mut AssetLocker,
    vault: &mut Vault,
    keys: EscrowKeys,
    params: LockParams,
) -> Result<()> {
    require!(params.price > 0, NftVaultSwapError::InvalidPrice);
    require!(!locker.is_active(), NftVaultSwapError::LockerAlreadyExists);
    asset.ensure_owner(&params.depositor)?;
    let remaining = params
        .depositor_lamports
        .checked_sub(params.price)
        .ok_or(NftVaultSwapError::InsufficientFunds)?;
    require!(
        remaining == 0 || remaining >= params.rent_exempt_minimum,
        NftVaultSwapError::InsufficientFunds
    );

    vault.deposit(params.price)?;
    asset.transfer_to(keys.vault);
    *locker = AssetLocker {
        depositor: params.depositor,
        asset: keys.asset,
        price: params.price,
        locked_at: params.locked_at,
        bump: params.bump,
    };

    Ok(())
}

/// Returns the lamports to refund to the depositor.
pub fn unlock(
    asset: &mut Asset,
    locker: &AssetLocker,
    vault: &mut Vault,
    keys: EscrowKeys,
    caller: &Pubkey,
) -> Result<u64> {
    ensure_locked(asset, locker, keys)?;
    require_keys_eq!(*caller, locker.depositor, NftVaultSwapError::Unauthorized);

    vault.release(locker.price)?;
    asset.transfer_to(locker.depositor);

    Ok(locker.price)
}

/// `fee` is whatever the config holds when the swap executes.
pub fn swap(
    asset: &mut Asset,
    locker: &AssetLocker,
    vault: &mut Vault,
    keys: EscrowKeys,
    buyer: Pubkey,
    fee: u64,
) -> Result<Settlement> {
    ensure_locked(asset, locker, keys)?;
    require_keys_neq!(buyer, locker.depositor, NftVaultSwapError::SelfSwap);

    let settlement = vault.settle(locker.price, fee)?;
    asset.transfer_to(buyer);

    Ok(settlement)
}

fn ensure_locked(asset: &Asset, locker: &AssetLocker, keys: EscrowKeys) -> Result<()> {
    require!(locker.is_active(), NftVaultSwapError::LockerNotFound);
    require_keys_eq!(locker.asset, keys.asset, NftVaultSwapError::InvalidAsset);
    require!(asset.is_held_by(&keys.vault), NftVaultSwapError::InvalidAsset);
    Ok(())
}
