//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render typed view-model state handed to them by pages; none of
//! them talk to the network.

pub mod link_card;
pub mod nav_bar;
pub mod notice;
pub mod pagination_bar;
