//! `sol!` bindings for the contract suite.
//!
//! The ABIs are a fixed external interface; only the functions and events
//! the SDK actually drives are declared here.

pub mod oracle;
pub mod proxy;
pub mod swap;
pub mod token;
