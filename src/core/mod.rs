pub mod filter;
pub mod frequency;
pub mod session;
pub mod stats;
