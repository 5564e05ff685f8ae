//! S-expression rendering of a syntax tree.
//!
//! ```text
//! (statements (int x) (= x (+ a 1)) (if (== x 2) (statements)))
//! ```
//!
//! Rendering walks an explicit stack, so output size and stack use stay
//! linear in the number of nodes however deep the tree is.

use tinyc_parser::{Node, NodeKind};

enum Step<'a> {
    Enter(&'a Node),
    Close,
}

/// Render `root` on a single line.
pub fn render(root: &Node) -> String {
    let mut out = String::new();
    let mut steps = vec![Step::Enter(root)];

    while let Some(step) = steps.pop() {
        let node = match step {
            Step::Close => {
                out.push(')');
                continue;
            }
            Step::Enter(node) => node,
        };

        if !out.is_empty() {
            out.push(' ');
        }

        if node.is_leaf() && node.kind != NodeKind::StatementList {
            out.push_str(node.text());
            continue;
        }

        out.push('(');
        out.push_str(node.text.as_deref().unwrap_or("statements"));
        steps.push(Step::Close);
        steps.extend(node.children.iter().rev().map(Step::Enter));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plus(left: Node, right: Node) -> Node {
        Node::binary(NodeKind::Plus, "+", left, right)
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(render(&Node::statement_list(Vec::new())), "(statements)");
    }

    #[test]
    fn test_statements() {
        let program = Node::statement_list(vec![
            Node::new(
                NodeKind::Declaration,
                Some("int".to_string()),
                vec![Node::identifier("c")],
            ),
            Node::new(
                NodeKind::If,
                Some("if".to_string()),
                vec![
                    Node::binary(
                        NodeKind::Equal,
                        "==",
                        Node::identifier("c"),
                        Node::number("30"),
                    ),
                    Node::statement_list(vec![Node::new(
                        NodeKind::Assignment,
                        Some("=".to_string()),
                        vec![
                            Node::identifier("c"),
                            plus(Node::identifier("c"), Node::number("1")),
                        ],
                    )]),
                ],
            ),
        ]);

        assert_eq!(
            render(&program),
            "(statements (int c) (if (== c 30) (statements (= c (+ c 1)))))"
        );
    }

    #[test]
    fn test_deep_chain() {
        let mut node = Node::number("0");
        for _ in 0..100_000 {
            node = plus(node, Node::number("1"));
        }

        let out = render(&node);
        assert!(out.starts_with("(+ (+ (+ "));
        assert!(out.ends_with(" 1) 1) 1)"));
        assert_eq!(out.matches('(').count(), 100_000);
        assert_eq!(out.matches(')').count(), 100_000);
    }
}
