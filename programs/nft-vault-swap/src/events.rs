use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub fee: u64,
}

#[event]
pub struct FeeUpdated {
    pub admin: Pubkey,
    pub old_fee: u64,
    pub new_fee: u64,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct CollectionCreated {
    pub collection: Pubkey,
    pub update_authority: Pubkey,
    pub name: String,
}

#[event]
pub struct AssetMinted {
    pub asset: Pubkey,
    pub collection: Pubkey,
    pub owner: Pubkey,
    pub index: u64,
}

#[event]
pub struct AssetLocked {
    pub asset: Pubkey,
    pub depositor: Pubkey,
    pub price: u64,
    pub locked_at: i64,
}

#[event]
pub struct AssetUnlocked {
    pub asset: Pubkey,
    pub depositor: Pubkey,
    pub refund_amount: u64,
    pub unlocked_at: i64,
}

#[event]
pub struct AssetSwapped {
    pub asset: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub price: u64,
    pub payout: u64,
    pub fee_retained: u64,
    pub swapped_at: i64,
}
