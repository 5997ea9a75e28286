//! Injected catalog reader for Partida rows.
//!
//! The engine never performs I/O itself; loading catalog rows is delegated
//! to an implementation of [`PartidaCatalog`] supplied by the caller.

use tesoro_shared::types::{CompanyCode, MovementType};

use super::error::PartidaError;
use super::types::{Partida, PartidaEdge};

/// Read access to the Partida catalog for one company and movement type.
///
/// Implementations return only active rows. Infrastructure failures (backing
/// store unavailable, etc.) surface as [`PartidaError::Catalog`] and are
/// propagated unchanged; the engine adds no retry semantics.
pub trait PartidaCatalog {
    /// Returns all active Partida rows for (company, movement).
    fn partidas(
        &self,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<Partida>, PartidaError>;

    /// Returns all active hierarchy edges for (company, movement).
    fn edges(
        &self,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<PartidaEdge>, PartidaError>;
}

/// Reference in-memory catalog backed by plain vectors.
///
/// Useful for tests and for callers that already hold the rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryPartidaCatalog {
    /// The catalog items.
    pub items: Vec<Partida>,
    /// The hierarchy edges.
    pub links: Vec<PartidaEdge>,
}

impl MemoryPartidaCatalog {
    /// Creates a catalog from item and edge rows.
    #[must_use]
    pub fn new(items: Vec<Partida>, links: Vec<PartidaEdge>) -> Self {
        Self { items, links }
    }
}

impl PartidaCatalog for MemoryPartidaCatalog {
    fn partidas(
        &self,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<Partida>, PartidaError> {
        Ok(self
            .items
            .iter()
            .filter(|p| p.is_active && p.movement == movement && &p.company == company)
            .cloned()
            .collect())
    }

    fn edges(
        &self,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<PartidaEdge>, PartidaError> {
        Ok(self
            .links
            .iter()
            .filter(|e| e.movement == movement && &e.company == company)
            .cloned()
            .collect())
    }
}
