pub mod create_collection;
pub mod initialize_config;
pub mod lock_nft;
pub mod mint_nft;
pub mod swap_nft;
pub mod unlock_nft;
pub mod update_config;

pub use create_collection::*;
pub use initialize_config::*;
pub use lock_nft::*;
pub use mint_nft::*;
pub use swap_nft::*;
pub use unlock_nft::*;
pub use update_config::*;
