//! CLI command implementations

pub(crate) mod common;
pub(crate) mod create;
pub(crate) mod generate;
