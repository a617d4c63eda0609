// Metadata size limits. Account space is reserved for the maximum.
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_URI_LEN: usize = 200;
pub const MAX_PLUGINS: usize = 8;
pub const MAX_ATTRIBUTE_KEY_LEN: usize = 32;
pub const MAX_ATTRIBUTE_VALUE_LEN: usize = 64;
