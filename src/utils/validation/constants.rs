//! Length bounds used throughout the validation system (inclusive, in characters)

/// Registration display name
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 30;

/// Registration password
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 30;

/// Body of a post or a comment
pub const MIN_CONTENT_LENGTH: usize = 6;
pub const MAX_CONTENT_LENGTH: usize = 1_024;

/// Profile handle
pub const MIN_HANDLE_LENGTH: usize = 2;
pub const MAX_HANDLE_LENGTH: usize = 40;
