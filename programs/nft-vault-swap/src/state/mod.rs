pub mod asset;
pub mod asset_locker;
pub mod collection;
pub mod config;
pub mod metadata;
pub mod vault;

pub use asset::*;
pub use asset_locker::*;
pub use collection::*;
pub use config::*;
pub use metadata::*;
pub use vault::*;
