use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::NftVaultSwapError;

/// Balances of (vault, recipient) after paying `amount` out of the vault.
/// Only lamports above `rent_exempt_minimum` can leave the vault.
pub fn payout_balances(
    vault_lamports: u64,
    rent_exempt_minimum: u64,
    recipient_lamports: u64,
    amount: u64,
) -> Result<(u64, u64)> {
    let available = vault_lamports.saturating_sub(rent_exempt_minimum);
    require!(available >= amount, NftVaultSwapError::VaultUnderfunded);

    let recipient_balance = recipient_lamports
        .checked_add(amount)
        .ok_or(NftVaultSwapError::Overflow)?;

    Ok((vault_lamports - amount, recipient_balance))
}

/// Moves lamports out of the program-owned vault without a CPI.
/// The vault keeps `rent_exempt_minimum`.
pub fn pay_from_vault<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
    rent_exempt_minimum: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let (vault_balance, recipient_balance) = payout_balances(
        vault.lamports(),
        rent_exempt_minimum,
        recipient.lamports(),
        amount,
    )?;

    **vault.try_borrow_mut_lamports()? = vault_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;

    Ok(())
}

/// Closes a program-owned account, refunding its rent to `destination`.
pub fn close_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let destination_balance = destination
        .lamports()
        .checked_add(account.lamports())
        .ok_or(NftVaultSwapError::Overflow)?;

    **destination.try_borrow_mut_lamports()? = destination_balance;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&system_program::ID);
    account.resize(0)?;

    Ok(())
}
