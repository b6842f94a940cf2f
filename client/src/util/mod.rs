//! Browser utilities shared by pages.

pub mod clipboard;
pub mod toast;
