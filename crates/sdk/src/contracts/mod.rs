//! Typed clients for the contract suite.
//!
//! Each client wraps one `sol!` instance and exposes the operations the
//! demo drives: reads return unpacked values, writes return only after the
//! transaction is confirmed and the expected event was parsed out of the
//! receipt.

mod chequebook;
mod factory;
mod oracle;
mod proxy;
mod token;

pub use chequebook::{Chequebook, ChequebookState};
pub use factory::Factory;
pub use oracle::{Oracle, OracleState};
pub use proxy::Proxy;
pub use token::{Token, TokenInfo};
