use crate::define_parser;
use crate::model::ImportStatement;
use crate::parser::common::{has_type_keyword, string_contents};
use crate::parser::{ImportParser, ParseError};
use std::path::Path;
use tree_sitter::Node;

define_parser!(TS_PARSER, tree_sitter_typescript::LANGUAGE_TYPESCRIPT);
define_parser!(TSX_PARSER, tree_sitter_typescript::LANGUAGE_TSX);

pub struct TypeScriptParser;

impl TypeScriptParser {
    pub fn new() -> Self {
        Self
    }
}

impl ImportParser for TypeScriptParser {
    fn extensions(&self) -> &[&str] {
        &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"]
    }

    fn parse_imports(&self, path: &Path, source: &str) -> Result<Vec<ImportStatement>, ParseError> {
        // JSX needs the TSX grammar; plain JS parses fine as TypeScript
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let tree = if matches!(ext, "tsx" | "jsx") {
            TSX_PARSER.with(|parser| parser.borrow_mut().parse(source, None))
        } else {
            TS_PARSER.with(|parser| parser.borrow_mut().parse(source, None))
        }
        .ok_or_else(|| ParseError::Parse(path.display().to_string()))?;

        let root = tree.root_node();
        let mut imports = Vec::new();
        let mut cursor = root.walk();

        for node in root.children(&mut cursor) {
            match node.kind() {
                "import_statement" => {
                    if let Some(statement) = import_from(&node, source, import_is_type_only(&node)) {
                        imports.push(statement);
                    }
                }
                // Only re-exports carry a source
                "export_statement" => {
                    if let Some(statement) = import_from(&node, source, export_is_type_only(&node)) {
                        imports.push(statement);
                    }
                }
                _ => {}
            }
        }

        Ok(imports)
    }
}

fn import_from(node: &Node, source: &str, is_type_only: bool) -> Option<ImportStatement> {
    let source_node = node.child_by_field_name("source")?;
    let (specifier, span) = string_contents(&source_node, source)?;
    let position = source_node.start_position();

    Some(ImportStatement {
        specifier,
        span,
        line: position.row + 1,
        column: position.column + 2,
        is_type_only,
    })
}

/// `import type { A } from "x"`, or every named specifier marked `type`.
fn import_is_type_only(node: &Node) -> bool {
    if has_type_keyword(node) {
        return true;
    }

    let mut cursor = node.walk();
    let Some(clause) = node
        .children(&mut cursor)
        .find(|child| child.kind() == "import_clause")
    else {
        return false;
    };

    let mut clause_cursor = clause.walk();
    let parts: Vec<Node> = clause.named_children(&mut clause_cursor).collect();
    // a default or namespace import next to the braces is a value import
    match parts.as_slice() {
        [named] if named.kind() == "named_imports" => all_specifiers_typed(named, "import_specifier"),
        _ => false,
    }
}

/// `export type { A } from "x"`, or every exported specifier marked `type`.
fn export_is_type_only(node: &Node) -> bool {
    if has_type_keyword(node) {
        return true;
    }

    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| child.kind() == "export_clause")
        .is_some_and(|clause| all_specifiers_typed(&clause, "export_specifier"))
}

fn all_specifiers_typed(list: &Node, specifier_kind: &str) -> bool {
    let mut cursor = list.walk();
    let specifiers: Vec<Node> = list
        .named_children(&mut cursor)
        .filter(|child| child.kind() == specifier_kind)
        .collect();
    !specifiers.is_empty() && specifiers.iter().all(has_type_keyword)
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}
