mod base;
mod context;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::*;
pub use base::{ConfigError, ParseError};
pub(crate) use context::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
