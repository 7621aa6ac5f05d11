#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use traverser::{
    LayoutConfig, LayoutReport, NodeIndex, Point, Side, Step, Tree, TreeGenerator,
};

/// Seeded generation on the given canvas.
pub fn seeded_tree(config: LayoutConfig, count: usize, seed: u64) -> (Tree, LayoutReport) {
    TreeGenerator::new(config)
        .expect("valid layout config")
        .generate_with_rng(count, &mut StdRng::seed_from_u64(seed))
        .expect("generation succeeds")
}

/// Build a tree from `(parent, side)` edges, where `parent` counts nodes in
/// insertion order (root = 0), then relabel. Positions are irrelevant here.
pub fn build_tree(edges: &[(usize, Side)]) -> Tree {
    let mut tree = Tree::with_root(Point::default());
    let mut inserted: Vec<NodeIndex> = tree.root().into_iter().collect();
    for &(parent, side) in edges {
        let child = tree
            .attach(inserted[parent], side, Point::default())
            .expect("slot is free");
        inserted.push(child);
    }
    tree.relabel_breadth_first();
    tree
}

/// Root 1 with children 2 and 3.
pub fn three_nodes() -> Tree {
    build_tree(&[(0, Side::Left), (0, Side::Right)])
}

/// Lopsided seven-node tree:
///
/// ```text
///         1
///       /   \
///      2     3
///     / \     \
///    4   5     6
///       /
///      7
/// ```
pub fn lopsided() -> Tree {
    build_tree(&[
        (0, Side::Left),
        (0, Side::Right),
        (1, Side::Left),
        (1, Side::Right),
        (2, Side::Right),
        (4, Side::Left),
    ])
}

/// Display ids of every node under (and including) `index`.
pub fn subtree_ids(tree: &Tree, index: NodeIndex) -> HashSet<u32> {
    let mut ids = HashSet::new();
    let mut stack = vec![index];
    while let Some(current) = stack.pop() {
        let node = &tree[current];
        ids.insert(node.id);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    ids
}

/// Straightforward recursive in-order, used as an oracle.
pub fn recursive_in_order(tree: &Tree, index: Option<NodeIndex>, out: &mut Vec<Step>) {
    if let Some(index) = index {
        let node = &tree[index];
        out.push(Step::visited(node.id));
        recursive_in_order(tree, node.left(), out);
        out.push(Step::processed(node.id));
        recursive_in_order(tree, node.right(), out);
    }
}

/// Straightforward recursive pre-order, used as an oracle.
pub fn recursive_pre_order(tree: &Tree, index: Option<NodeIndex>, out: &mut Vec<Step>) {
    if let Some(index) = index {
        let node = &tree[index];
        out.push(Step::visited(node.id));
        out.push(Step::processed(node.id));
        recursive_pre_order(tree, node.left(), out);
        recursive_pre_order(tree, node.right(), out);
    }
}

/// Straightforward recursive post-order, used as an oracle.
pub fn recursive_post_order(tree: &Tree, index: Option<NodeIndex>, out: &mut Vec<Step>) {
    if let Some(index) = index {
        let node = &tree[index];
        out.push(Step::visited(node.id));
        recursive_post_order(tree, node.left(), out);
        recursive_post_order(tree, node.right(), out);
        out.push(Step::processed(node.id));
    }
}
