pub mod config;
pub mod error;
pub mod inspect;
pub mod server;
pub mod utils;

pub use error::ScopeError;
pub use inspect::{Inspection, Inspector};
pub use jwtscope_core::{JwtHeader, JwtPayload};
