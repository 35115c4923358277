//! Core token-building logic.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod payload;
pub mod pem_chain;
pub mod unencoded;
pub mod x5c;
