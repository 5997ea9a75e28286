//! Budget item (Partida) hierarchy resolution.
//!
//! The chart of accounts stores its hierarchy as a flat adjacency table;
//! this module turns it into a navigable tree with per-movement-type depth
//! constraints.
//!
//! # Modules
//!
//! - `types` - Catalog rows and derived tree nodes
//! - `error` - Partida-specific error types
//! - `catalog` - Injected catalog reader
//! - `resolver` - Tree building, leaf selection, path walks

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod resolver_props;

pub use catalog::{MemoryPartidaCatalog, PartidaCatalog};
pub use error::PartidaError;
pub use resolver::HierarchyResolver;
pub use types::{Partida, PartidaEdge, PartidaTreeNode};
