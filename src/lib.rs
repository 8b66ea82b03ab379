//! Blockfall (workspace facade crate).
//!
//! Re-exports the rules engine and its terminal collaborators under one
//! `blockfall::{core,input,term,types}` path, and hosts the pieces the binary
//! needs around them: environment configuration and the session journal.

pub mod config;
pub mod journal;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
