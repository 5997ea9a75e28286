//! Partida hierarchy resolution.
//!
//! The catalog stores the hierarchy as a flat adjacency table where a
//! self-referencing row marks a root. The resolver rebuilds that table into
//! an explicit in-memory tree per request: nodes own their children, parent
//! links are back-reference codes used only for path walks.

use std::collections::HashMap;

use tesoro_shared::config::HierarchyConfig;
use tesoro_shared::types::{CompanyCode, ItemCode, MovementType};

use super::catalog::PartidaCatalog;
use super::error::PartidaError;
use super::types::{Partida, PartidaEdge, PartidaTreeNode};

/// Resolves the flat Partida adjacency table into a navigable tree.
///
/// Stateless with respect to concurrent invocation: catalog rows are
/// re-read per call and the resulting tree is request-local.
#[derive(Debug, Clone)]
pub struct HierarchyResolver {
    config: HierarchyConfig,
}

impl HierarchyResolver {
    /// Creates a resolver with the given hierarchy configuration.
    #[must_use]
    pub const fn new(config: HierarchyConfig) -> Self {
        Self { config }
    }

    /// Returns the required leaf depth for a movement type.
    #[must_use]
    pub const fn required_depth(&self, movement: MovementType) -> u8 {
        self.config.required_depth(movement)
    }

    /// Builds the ordered list of root tree nodes for (company, movement).
    ///
    /// Roots are the items at level 1 or without a resolvable parent link.
    /// Children are ordered by edge display order, ties broken by item code
    /// ascending. Every node reachable from the returned roots carries a
    /// non-empty, acyclic-safe full path. An empty catalog yields an empty
    /// tree.
    pub fn build_tree<C: PartidaCatalog>(
        &self,
        catalog: &C,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<PartidaTreeNode>, PartidaError> {
        let items = catalog.partidas(company, movement)?;
        let edges = catalog.edges(company, movement)?;

        let items_by_code: HashMap<ItemCode, Partida> =
            items.into_iter().map(|p| (p.item_code, p)).collect();
        let order = display_orders(&edges);
        let parents = resolve_parent_links(&items_by_code, &edges);

        let mut children_of: HashMap<ItemCode, Vec<ItemCode>> = HashMap::new();
        for (&child, &parent) in &parents {
            children_of.entry(parent).or_default().push(child);
        }
        for siblings in children_of.values_mut() {
            sort_by_display_order(siblings, &order);
        }

        let mut roots: Vec<ItemCode> = items_by_code
            .keys()
            .copied()
            .filter(|code| !parents.contains_key(code))
            .collect();
        sort_by_display_order(&mut roots, &order);

        Ok(roots
            .into_iter()
            .map(|code| {
                self.build_node(code, &items_by_code, &children_of, &parents, movement, None)
            })
            .collect())
    }

    /// Returns the flat list of voucher-selectable items: leaves at the
    /// required depth for the movement type.
    ///
    /// This is the authoritative "may appear on a voucher detail line" set.
    pub fn leaf_partidas<C: PartidaCatalog>(
        &self,
        catalog: &C,
        company: &CompanyCode,
        movement: MovementType,
    ) -> Result<Vec<PartidaTreeNode>, PartidaError> {
        let roots = self.build_tree(catalog, company, movement)?;
        let mut leaves = Vec::new();
        for root in &roots {
            root.walk(&mut |node| {
                if node.selectable {
                    leaves.push(node.clone());
                }
            });
        }
        Ok(leaves)
    }

    /// Validates that an item may be referenced by a voucher detail line.
    ///
    /// # Errors
    ///
    /// Returns `PartidaError::NotFound` if the item is absent and
    /// `PartidaError::NotLeafEligible` if its stored level differs from the
    /// required depth for the movement type.
    pub fn validate_for_voucher<C: PartidaCatalog>(
        &self,
        catalog: &C,
        company: &CompanyCode,
        movement: MovementType,
        item_code: ItemCode,
    ) -> Result<Partida, PartidaError> {
        let items = catalog.partidas(company, movement)?;
        let item = items
            .into_iter()
            .find(|p| p.item_code == item_code)
            .ok_or(PartidaError::NotFound {
                item_code,
                movement,
            })?;

        let required = self.required_depth(movement);
        if item.level != required {
            return Err(PartidaError::NotLeafEligible {
                item_code,
                level: item.level,
                movement,
                required,
            });
        }
        Ok(item)
    }

    /// Validates an item level at catalog-edit time.
    ///
    /// # Errors
    ///
    /// Returns `PartidaError::InvalidLevel` if the level is zero or above
    /// the ceiling for the movement type.
    pub fn validate_level(
        &self,
        movement: MovementType,
        level: u8,
    ) -> Result<(), PartidaError> {
        let max = self.required_depth(movement);
        if level == 0 || level > max {
            return Err(PartidaError::InvalidLevel {
                level,
                movement,
                max,
            });
        }
        Ok(())
    }

    /// Resolves the full path of a single item without materializing the
    /// whole tree.
    ///
    /// # Errors
    ///
    /// Returns `PartidaError::NotFound` if the item is absent.
    pub fn full_path<C: PartidaCatalog>(
        &self,
        catalog: &C,
        company: &CompanyCode,
        movement: MovementType,
        item_code: ItemCode,
    ) -> Result<String, PartidaError> {
        let items = catalog.partidas(company, movement)?;
        let edges = catalog.edges(company, movement)?;
        let items_by_code: HashMap<ItemCode, Partida> =
            items.into_iter().map(|p| (p.item_code, p)).collect();
        if !items_by_code.contains_key(&item_code) {
            return Err(PartidaError::NotFound {
                item_code,
                movement,
            });
        }
        let parents = resolve_parent_links(&items_by_code, &edges);
        Ok(self.path_of(item_code, &items_by_code, &parents))
    }

    /// Resolves the direct parent of a single item, if any.
    ///
    /// # Errors
    ///
    /// Returns `PartidaError::NotFound` if the item is absent.
    pub fn parent<C: PartidaCatalog>(
        &self,
        catalog: &C,
        company: &CompanyCode,
        movement: MovementType,
        item_code: ItemCode,
    ) -> Result<Option<Partida>, PartidaError> {
        let items = catalog.partidas(company, movement)?;
        let edges = catalog.edges(company, movement)?;
        let items_by_code: HashMap<ItemCode, Partida> =
            items.into_iter().map(|p| (p.item_code, p)).collect();
        if !items_by_code.contains_key(&item_code) {
            return Err(PartidaError::NotFound {
                item_code,
                movement,
            });
        }
        let parents = resolve_parent_links(&items_by_code, &edges);
        Ok(parents
            .get(&item_code)
            .and_then(|code| items_by_code.get(code))
            .cloned())
    }

    /// Builds one owned node and its subtree.
    fn build_node(
        &self,
        code: ItemCode,
        items_by_code: &HashMap<ItemCode, Partida>,
        children_of: &HashMap<ItemCode, Vec<ItemCode>>,
        parents: &HashMap<ItemCode, ItemCode>,
        movement: MovementType,
        parent_path: Option<&str>,
    ) -> PartidaTreeNode {
        // Parent maps are acyclic after link resolution, so recursion depth
        // is bounded by the catalog size.
        let item = items_by_code[&code].clone();
        let full_path = match parent_path {
            Some(prefix) => format!("{prefix}{}{}", self.config.path_separator, item.name),
            None => item.name.clone(),
        };

        let children: Vec<PartidaTreeNode> = children_of
            .get(&code)
            .map(|codes| {
                codes
                    .iter()
                    .map(|&child| {
                        self.build_node(
                            child,
                            items_by_code,
                            children_of,
                            parents,
                            movement,
                            Some(full_path.as_str()),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        let is_leaf = children.is_empty();
        let selectable = is_leaf && item.level == self.required_depth(movement);

        PartidaTreeNode {
            parent: parents.get(&code).copied(),
            item,
            children,
            full_path,
            is_leaf,
            selectable,
        }
    }

    /// Walks parent links upward and joins display names root-to-leaf.
    fn path_of(
        &self,
        item_code: ItemCode,
        items_by_code: &HashMap<ItemCode, Partida>,
        parents: &HashMap<ItemCode, ItemCode>,
    ) -> String {
        let mut names = Vec::new();
        let mut current = Some(item_code);
        while let Some(code) = current {
            if let Some(item) = items_by_code.get(&code) {
                names.push(item.name.as_str());
            }
            current = parents.get(&code).copied();
        }
        names.reverse();
        names.join(&self.config.path_separator)
    }
}

/// Extracts each item's display order from its edge rows.
///
/// Self-referencing root markers contribute the ordering of top-level items.
fn display_orders(edges: &[PartidaEdge]) -> HashMap<ItemCode, i32> {
    let mut order = HashMap::new();
    for edge in edges {
        order.entry(edge.item_code).or_insert(edge.display_order);
    }
    order
}

/// Sorts sibling codes by display order, ties broken by item code ascending.
fn sort_by_display_order(codes: &mut [ItemCode], order: &HashMap<ItemCode, i32>) {
    codes.sort_by_key(|code| (order.get(code).copied().unwrap_or(i32::MAX), *code));
}

/// Builds the effective parent map from the raw edge rows.
///
/// Drops self-referencing root markers, edges whose endpoints are not in the
/// active item set, and parent links on level-1 items (level 1 is a root by
/// definition). Any cycle left in the raw data is severed at the first link
/// that points back to an already-visited node, which turns that item into a
/// root instead of looping forever.
fn resolve_parent_links(
    items_by_code: &HashMap<ItemCode, Partida>,
    edges: &[PartidaEdge],
) -> HashMap<ItemCode, ItemCode> {
    let mut parents: HashMap<ItemCode, ItemCode> = HashMap::new();
    for edge in edges {
        if edge.is_root_marker() {
            continue;
        }
        if !items_by_code.contains_key(&edge.item_code)
            || !items_by_code.contains_key(&edge.parent_item_code)
        {
            continue;
        }
        if items_by_code[&edge.item_code].level == 1 {
            continue;
        }
        // At most one parent edge per item; first row wins.
        parents.entry(edge.item_code).or_insert(edge.parent_item_code);
    }

    // Sever cycles deterministically, lowest item code first.
    let mut codes: Vec<ItemCode> = parents.keys().copied().collect();
    codes.sort_unstable();
    for start in codes {
        let mut visited = vec![start];
        let mut current = start;
        while let Some(&parent) = parents.get(&current) {
            if visited.contains(&parent) {
                parents.remove(&current);
                break;
            }
            visited.push(parent);
            current = parent;
        }
    }

    parents
}
