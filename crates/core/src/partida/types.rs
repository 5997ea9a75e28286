//! Partida catalog and tree types.

use serde::{Deserialize, Serialize};
use tesoro_shared::types::{CompanyCode, ItemCode, MovementType};

/// A budget line item from the chart of accounts, scoped by company and
/// movement type.
///
/// Catalog rows are created and maintained by catalog administration; this
/// core only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partida {
    /// Company this item belongs to.
    pub company: CompanyCode,
    /// Movement type (income or expense).
    pub movement: MovementType,
    /// Numeric item code, unique within (company, movement).
    pub item_code: ItemCode,
    /// Alphanumeric display code (e.g., "02.01").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Depth level in the hierarchy (1 = root).
    pub level: u8,
    /// Whether the item is active.
    pub is_active: bool,
}

/// A hierarchy link between two catalog items.
///
/// An edge whose `parent_item_code` equals its own `item_code` marks the item
/// as a root; each item has at most one parent edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartidaEdge {
    /// Company this edge belongs to.
    pub company: CompanyCode,
    /// Movement type of both endpoints.
    pub movement: MovementType,
    /// Child item code.
    pub item_code: ItemCode,
    /// Edge sequence number within the item.
    pub sequence: i32,
    /// Parent item code (equal to `item_code` for roots).
    pub parent_item_code: ItemCode,
    /// Display order among siblings.
    pub display_order: i32,
}

impl PartidaEdge {
    /// Returns true if this edge marks its item as a root.
    #[must_use]
    pub fn is_root_marker(&self) -> bool {
        self.parent_item_code == self.item_code
    }
}

/// A node of the resolved Partida tree.
///
/// Built fresh per query and never persisted. Nodes own their children
/// (arena-style); the parent link is a back-reference code used only for
/// path walks, never for ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartidaTreeNode {
    /// The catalog item at this node.
    pub item: Partida,
    /// Parent item code, if this node has a resolvable parent.
    pub parent: Option<ItemCode>,
    /// Child nodes, ordered by edge display order then item code.
    pub children: Vec<PartidaTreeNode>,
    /// Full path from root to this node, display names joined by the
    /// configured separator.
    pub full_path: String,
    /// True if this node has no children.
    pub is_leaf: bool,
    /// True if this node may appear on a voucher detail line: leaf AND at
    /// the required depth for its movement type.
    pub selectable: bool,
}

impl PartidaTreeNode {
    /// Returns the node's depth level.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.item.level
    }

    /// Walks this subtree depth-first, visiting each node.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a PartidaTreeNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
