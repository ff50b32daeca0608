mod core;
mod model;
mod names;
mod registry;

pub(crate) use self::core::*;
pub(crate) use model::*;
pub(crate) use registry::*;
