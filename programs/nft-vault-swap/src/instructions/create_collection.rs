use anchor_lang::prelude::*;

use crate::events::CollectionCreated;
use crate::state::collection::Collection;
use crate::state::metadata::{validate_metadata, Attribute};

#[derive(Accounts)]
pub struct CreateCollection<'info> {
    /// Pays for the collection account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// New collection account — a fresh keypair that co-signs
    #[account(
        init,
        payer = payer,
        space = Collection::LEN,
    )]
    pub collection: Account<'info, Collection>,

    /// CHECK: Only the key is stored. Defaults to the payer when omitted.
    pub update_authority: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateCollectionArgs {
    pub name: String,
    pub uri: String,
    pub plugins: Vec<Attribute>,
}

pub fn handler(ctx: Context<CreateCollection>, args: CreateCollectionArgs) -> Result<()> {
    validate_metadata(&args.name, &args.uri, &args.plugins)?;

    let update_authority = ctx
        .accounts
        .update_authority
        .as_ref()
        .map(|authority| authority.key())
        .unwrap_or_else(|| ctx.accounts.payer.key());

    let collection = &mut ctx.accounts.collection;
    collection.update_authority = update_authority;
    collection.num_minted = 0;
    collection.name = args.name;
    collection.uri = args.uri;
    collection.plugins = args.plugins;

    emit!(CollectionCreated {
        collection: collection.key(),
        update_authority,
        name: collection.name.clone(),
    });

    Ok(())
}
