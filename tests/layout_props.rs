//! Geometric and labeling properties of generated trees

mod common;

use common::seeded_tree;
use proptest::prelude::*;
use traverser::{LayoutConfig, Tree};

/// Every invariant a generated tree must satisfy, whatever its size.
fn assert_consistent(tree: &Tree, config: &LayoutConfig) {
    let root = tree.root().expect("generated tree has a root");
    assert_eq!(tree[root].id, 1, "root keeps id 1");

    let level_order: Vec<u32> = tree.breadth_first().map(|(_, n)| n.id).collect();
    let expected: Vec<u32> = (1..=tree.len() as u32).collect();
    assert_eq!(level_order, expected, "ids must be contiguous in level order");

    let nodes = tree.nodes();
    for (i, a) in nodes.iter().enumerate() {
        assert!(
            (0.0..=config.canvas_width).contains(&a.position.x)
                && (0.0..=config.canvas_height).contains(&a.position.y),
            "node {} at {:?} is off the canvas",
            a.id,
            a.position
        );
        assert!(config.contains(&a.position), "node {} is clipped", a.id);

        for b in &nodes[i + 1..] {
            let distance = a.position.distance(&b.position);
            assert!(
                distance >= config.min_separation(),
                "nodes {} and {} overlap (distance {})",
                a.id,
                b.id,
                distance
            );
        }
    }

    for (_, parent) in tree.breadth_first() {
        for child in [parent.left(), parent.right()].into_iter().flatten() {
            let child = &tree[child];
            assert_eq!(child.depth, parent.depth + 1);
            let dy = child.position.y - parent.position.y;
            assert!((dy - config.level_spacing).abs() < 1e-9);
            let dx = (child.position.x - parent.position.x).abs();
            assert!((dx - config.horizontal_offset(child.depth)).abs() < 1e-9);
        }
        if let Some(left) = parent.left() {
            assert!(tree[left].position.x < parent.position.x, "left child sits left");
        }
        if let Some(right) = parent.right() {
            assert!(tree[right].position.x > parent.position.x, "right child sits right");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_trees_are_consistent(
        count in 1usize..160,
        seed in any::<u64>(),
        width in 60.0f64..800.0,
        height in 60.0f64..600.0,
    ) {
        let config = LayoutConfig::with_canvas(width, height);
        let (tree, report) = seeded_tree(config.clone(), count, seed);

        prop_assert_eq!(report.requested, count);
        prop_assert_eq!(report.placed, tree.len());
        prop_assert!(tree.len() >= 1 && tree.len() <= count);
        assert_consistent(&tree, &config);
    }
}

#[test]
fn exhausted_canvas_returns_smaller_valid_tree() {
    let config = LayoutConfig::with_canvas(300.0, 200.0);
    let (tree, report) = seeded_tree(config.clone(), 10_000, 11);

    assert!(report.is_partial());
    assert!(tree.len() < 10_000);
    assert_eq!(report.placed, tree.len());
    assert_consistent(&tree, &config);
}

#[test]
fn default_canvas_holds_default_request() {
    let config = LayoutConfig::default();
    let (tree, _) = seeded_tree(config.clone(), 120, 2024);
    assert!(tree.len() > 1);
    assert_consistent(&tree, &config);
}
