//! User-facing strings.
//!
//! Failures never pass server text through; each operation maps to one of
//! these generic messages.

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const NETWORK_ERROR: &str = "Network error";
pub const FIELDS_REQUIRED: &str = "Enter both username and password.";

pub const LOGIN_REQUIRED: &str = "You need to log in to create a link.";
pub const LINK_CREATED: &str = "Link created!";
pub const CREATE_FAILED: &str = "Failed to create link";
pub const URL_REQUIRED: &str = "Enter a URL to shorten.";

pub const LOAD_FAILED: &str = "Failed to load links";
pub const NO_LINKS: &str = "You have no links yet.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this link?";
pub const DELETE_FAILED: &str = "Failed to delete link";

pub const COPIED: &str = "Link copied to clipboard!";
pub const COPY_FAILED: &str = "Copy failed";

pub const ALIAS_INVALID: &str = "Use only letters, digits, - and _";
pub const ALIAS_TAKEN: &str = "This alias is already taken";
pub const ALIAS_AVAILABLE: &str = "Alias is available";
pub const ALIAS_CHECK_FAILED: &str = "Could not check alias";
pub const ALIAS_GENERATING: &str = "Generating...";
pub const ALIAS_GENERATED: &str = "Alias generated and available";
pub const ALIAS_UNVERIFIED: &str = "Alias generated (needs checking)";
