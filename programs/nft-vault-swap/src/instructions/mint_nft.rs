use anchor_lang::prelude::*;

use crate::events::AssetMinted;
use crate::state::asset::Asset;
use crate::state::collection::{Collection, MintAuthority};
use crate::state::metadata::{validate_metadata, Attribute};
use crate::state::vault::Vault;

// ──────────────────────────────────────────────────────
// Mint NFT — collection authority only
//
// The asset PDA is indexed by the collection's minted
// count, which this instruction bumps by one.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct MintNft<'info> {
    /// Pays for the asset account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Collection authority, when it is not the payer
    pub authority: Option<Signer<'info>>,

    #[account(mut)]
    pub collection: Account<'info, Collection>,

    /// The vault PDA — only read, so a mint cannot hand an asset to it
    #[account(
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = payer,
        space = Asset::LEN,
        seeds = [
            Asset::SEED,
            collection.key().as_ref(),
            collection.num_minted.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub asset: Account<'info, Asset>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MintNftArgs {
    pub name: String,
    pub uri: String,
    /// Receiver of the asset; the payer when omitted
    pub owner: Option<Pubkey>,
    pub plugins: Vec<Attribute>,
}

pub fn handler(ctx: Context<MintNft>, args: MintNftArgs) -> Result<()> {
    let payer = ctx.accounts.payer.key();
    let authority = MintAuthority::resolve(
        ctx.accounts.authority.as_ref().map(|signer| signer.key()),
        payer,
    );

    let owner = Asset::resolve_owner(args.owner, payer, &ctx.accounts.vault.key())?;

    let collection = &mut ctx.accounts.collection;
    collection.authorize_mint(&authority)?;
    validate_metadata(&args.name, &args.uri, &args.plugins)?;

    let index = collection.record_mint()?;

    let asset = &mut ctx.accounts.asset;
    asset.collection = collection.key();
    asset.owner = owner;
    asset.update_authority = collection.update_authority;
    asset.index = index;
    asset.name = args.name;
    asset.uri = args.uri;
    asset.plugins = args.plugins;
    asset.bump = ctx.bumps.asset;

    emit!(AssetMinted {
        asset: asset.key(),
        collection: asset.collection,
        owner: asset.owner,
        index,
    });

    Ok(())
}
