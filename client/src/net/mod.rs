//! Browser-side persistence.
//!
//! All HTTP goes through `linkdeck::HttpApi` (reqwest's fetch backend).

pub mod storage;
