//! Command implementations for the Dota fantasy CLI

pub mod breakdown;
pub mod common;
pub mod draft;
pub mod teams;
