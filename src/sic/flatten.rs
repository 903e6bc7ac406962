// src/sic/flatten.rs
use super::{Node, Record};

/// Flatten a classification tree into records, pre-order.
///
/// Every node below `root` yields one record whose `parent_desc` is the label
/// of its direct container. The root itself is never emitted, so a root
/// without children gives an empty vector. Children of leaves are visited
/// like any other children.
pub fn flatten(root: &Node) -> Vec<Record> {
    let mut out = Vec::with_capacity(root.descendant_count());

    // (node, parent label); children pushed reversed so pops stay in document order
    let mut stack: Vec<(&Node, &str)> = root
        .children
        .iter()
        .rev()
        .map(|child| (child, root.label.as_str()))
        .collect();

    while let Some((node, parent)) = stack.pop() {
        out.push(Record::new(node.label.as_str(), parent));
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, node.label.as_str())),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sic::Level::*;

    #[test]
    fn single_leaf_under_root() {
        let group = Node::new("Industry Group 999: Nonclassifiable Establishments", IndustryGroup);
        let root = Node::new("Major Group 99: Nonclassifiable Establishments", Major)
            .with_children(vec![group]);
        let recs = flatten(&root);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].parent_desc, root.label);
    }
}
