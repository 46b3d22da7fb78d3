#[macro_use]
extern crate slog;

mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
pub mod graph;
pub use self::graph::LinkGraph;

pub mod page_rank;

#[cfg(test)]
mod arbitrary;
