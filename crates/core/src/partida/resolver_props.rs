//! Property-based tests for the hierarchy resolver.
//!
//! Random adjacency tables (including self markers, dangling rows, and
//! cycles) must always resolve into a clean forest.

use proptest::prelude::*;
use tesoro_shared::config::HierarchyConfig;
use tesoro_shared::types::{CompanyCode, ItemCode, MovementType};

use crate::partida::catalog::MemoryPartidaCatalog;
use crate::partida::resolver::HierarchyResolver;
use crate::partida::types::{Partida, PartidaEdge};

fn company() -> CompanyCode {
    CompanyCode::from("01")
}

#[derive(Debug, Clone)]
struct RawRow {
    level: u8,
    parent: i32,
    display_order: i32,
}

/// Strategy for a random adjacency table of `n` items with codes `1..=n`.
fn arb_catalog(movement: MovementType) -> impl Strategy<Value = MemoryPartidaCatalog> {
    (1usize..16).prop_flat_map(move |n| {
        proptest::collection::vec(
            (1u8..=3, 0i32..=i32::try_from(n).unwrap_or(1), 0i32..10).prop_map(
                |(level, parent, display_order)| RawRow {
                    level,
                    parent,
                    display_order,
                },
            ),
            n,
        )
        .prop_map(move |rows| {
            let mut items = Vec::new();
            let mut links = Vec::new();
            for (i, row) in rows.iter().enumerate() {
                let code = i32::try_from(i).unwrap_or(0) + 1;
                items.push(Partida {
                    company: company(),
                    movement,
                    item_code: ItemCode(code),
                    code: format!("{code:02}"),
                    name: format!("Item {code}"),
                    level: row.level,
                    is_active: true,
                });
                // parent == 0 encodes a self-referencing root marker.
                let parent = if row.parent == 0 { code } else { row.parent };
                links.push(PartidaEdge {
                    company: company(),
                    movement,
                    item_code: ItemCode(code),
                    sequence: 1,
                    parent_item_code: ItemCode(parent),
                    display_order: row.display_order,
                });
            }
            MemoryPartidaCatalog::new(items, links)
        })
    })
}

fn resolver() -> HierarchyResolver {
    HierarchyResolver::new(HierarchyConfig::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every item appears in the forest exactly once: no node has two
    /// parents and every node is reachable from exactly one root.
    #[test]
    fn prop_forest_covers_each_item_once(catalog in arb_catalog(MovementType::Expense)) {
        let tree = resolver()
            .build_tree(&catalog, &company(), MovementType::Expense)
            .unwrap();

        let mut seen = Vec::new();
        for root in &tree {
            root.walk(&mut |node| seen.push(node.item.item_code));
        }
        seen.sort_unstable();
        let mut expected: Vec<ItemCode> =
            catalog.items.iter().map(|p| p.item_code).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    /// Selectable leaves are exactly the childless nodes at the required
    /// depth for the movement type.
    #[test]
    fn prop_leaves_at_required_depth_only(catalog in arb_catalog(MovementType::Expense)) {
        let r = resolver();
        let leaves = r
            .leaf_partidas(&catalog, &company(), MovementType::Expense)
            .unwrap();
        for leaf in &leaves {
            prop_assert!(leaf.is_leaf);
            prop_assert!(leaf.children.is_empty());
            prop_assert_eq!(leaf.level(), r.required_depth(MovementType::Expense));
        }
    }

    /// Every node in the forest carries a non-empty path that ends with its
    /// own display name.
    #[test]
    fn prop_paths_are_complete(catalog in arb_catalog(MovementType::Income)) {
        let tree = resolver()
            .build_tree(&catalog, &company(), MovementType::Income)
            .unwrap();
        for root in &tree {
            root.walk(&mut |node| {
                assert!(!node.full_path.is_empty());
                assert!(node.full_path.ends_with(&node.item.name));
            });
        }
    }

    /// The standalone path walk agrees with the path computed on the tree.
    #[test]
    fn prop_single_item_path_matches_tree(catalog in arb_catalog(MovementType::Expense)) {
        let r = resolver();
        let tree = r
            .build_tree(&catalog, &company(), MovementType::Expense)
            .unwrap();
        for root in &tree {
            root.walk(&mut |node| {
                let path = r
                    .full_path(
                        &catalog,
                        &company(),
                        MovementType::Expense,
                        node.item.item_code,
                    )
                    .unwrap();
                assert_eq!(path, node.full_path);
            });
        }
    }
}
