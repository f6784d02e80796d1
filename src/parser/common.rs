use tree_sitter::Node;

/// Specifier text and its byte range from a `string` node, quotes stripped.
pub fn string_contents(node: &Node, source: &str) -> Option<(String, std::ops::Range<usize>)> {
    if node.kind() != "string" {
        return None;
    }
    let (start, end) = (node.start_byte(), node.end_byte());
    if end < start + 2 {
        return None;
    }
    let span = start + 1..end - 1;
    source
        .get(span.clone())
        .map(|text| (text.to_string(), span))
}

/// Does `node` have an anonymous `type` keyword among its direct children?
pub fn has_type_keyword(node: &Node) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "type")
}

/// Macro to define a thread-local parser with a given language.
/// Usage: `define_parser!(PARSER_NAME, language_fn)`
#[macro_export]
macro_rules! define_parser {
    ($name:ident, $language:expr) => {
        thread_local! {
            static $name: std::cell::RefCell<tree_sitter::Parser> = std::cell::RefCell::new({
                let mut parser = tree_sitter::Parser::new();
                parser.set_language(&$language.into()).expect(concat!("Failed to set ", stringify!($name), " language"));
                parser
            });
        }
    };
}
