use pretty_assertions::assert_eq;
use tinyc_parser::{Node, NodeKind, Parser, SyntaxError};
use tinyc_token::ListingReader;

fn parse_listing(listing: &str) -> Result<Node, SyntaxError> {
    let tokens = ListingReader::read(listing).unwrap();
    Parser::new(tokens).parse()
}

#[test]
fn test_sample_program() {
    let program = parse_listing(include_str!("fixtures/sample.tokens")).unwrap();
    assert_eq!(program.kind, NodeKind::StatementList);
    assert_eq!(program.children.len(), 7);

    let c_sum = &program.children[5];
    assert_eq!(
        c_sum,
        &Node::new(
            NodeKind::Assignment,
            Some("=".to_string()),
            vec![
                Node::identifier("c"),
                Node::binary(
                    NodeKind::Plus,
                    "+",
                    Node::identifier("a"),
                    Node::identifier("b")
                ),
            ],
        )
    );

    let conditional = &program.children[6];
    assert_eq!(conditional.kind, NodeKind::If);
    assert_eq!(conditional.children[0].kind, NodeKind::Equal);
    assert_eq!(conditional.children[0].text(), "==");
    assert_eq!(conditional.children[1].children.len(), 1);
}

#[test]
fn test_unterminated_assignment() {
    let err = parse_listing(include_str!("fixtures/unterminated.tokens")).unwrap_err();
    assert_eq!(err.message, "Expected ';' after expression");
    assert_eq!(err.found, "");
    assert_eq!(err.position, 8);
}

#[test]
fn test_independent_parsers_on_threads() {
    let listing = include_str!("fixtures/sample.tokens");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokens = ListingReader::read(listing).unwrap();
            std::thread::spawn(move || Parser::new(tokens).parse())
        })
        .collect();

    for handle in handles {
        let program = handle.join().unwrap().unwrap();
        assert_eq!(program.children.len(), 7);
    }
}
