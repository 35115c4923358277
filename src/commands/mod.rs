//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments
//! and prints the resulting token.

pub mod b64_false;
pub mod x5c;
