//! nsjoin Core - Foundation types shared by the joiner, the hook and the CLI
//!
//! This crate provides the target identifier, the fixed set of namespace
//! kinds and their join order, and the error type used throughout nsjoin.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod namespace;
pub mod types;

pub use error::{Error, Result};
pub use namespace::{JOIN_ORDER, NamespaceKind};
pub use types::TargetPid;
