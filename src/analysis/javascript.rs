use std::path::Path;

use streaming_iterator::StreamingIterator;
use tracing::warn;
use tree_sitter::{Language as Grammar, Parser, Query, QueryCursor};

use crate::core::FileFacts;

/// Captures are named after the fact they feed.
const FACTS_QUERY: &str = r#"
(import_statement source: (string) @import)
(export_statement source: (string) @import)
(call_expression
  function: (identifier) @func
  arguments: (arguments (string) @import)
  (#eq? @func "require"))
(function_declaration name: (_) @function)
(class_declaration name: (_) @class)
(export_statement declaration: (function_declaration name: (_) @export))
(export_statement declaration: (class_declaration name: (_) @export))
(export_statement declaration: (lexical_declaration (variable_declarator name: (identifier) @export)))
(export_statement declaration: (variable_declaration (variable_declarator name: (identifier) @export)))
"#;

fn grammar_for(path: &Path) -> Grammar {
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "ts" | "mts" | "cts" => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        "tsx" => tree_sitter_typescript::LANGUAGE_TSX.into(),
        _ => tree_sitter_javascript::LANGUAGE.into(),
    }
}

/// Extracts imports, declarations and exports from JavaScript or TypeScript.
///
/// The parser recovers from syntax errors, so a partially broken file still
/// yields whatever it could read. Only a grammar/query failure gives up.
pub fn parse(content: &str, path: &Path) -> FileFacts {
    let mut facts = FileFacts::default();
    let language = grammar_for(path);

    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&language) {
        warn!(path = %path.display(), "grammar unavailable: {}", e);
        return facts;
    }

    let Some(tree) = parser.parse(content, None) else {
        warn!(path = %path.display(), "parser produced no tree");
        return facts;
    };

    let query = match Query::new(&language, FACTS_QUERY) {
        Ok(q) => q,
        Err(e) => {
            warn!(path = %path.display(), "invalid facts query: {}", e);
            return facts;
        }
    };

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), content.as_bytes());

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let Ok(text) = capture.node.utf8_text(content.as_bytes()) else {
                continue;
            };
            match query.capture_names()[capture.index as usize] {
                "import" => facts.imports.push(clean_specifier(text)),
                "function" => facts.functions.push(text.to_string()),
                "class" => facts.classes.push(text.to_string()),
                "export" => facts.exports.push(text.to_string()),
                _ => {}
            }
        }
    }

    facts.imports = super::dedup_in_order(facts.imports);
    facts
}

fn clean_specifier(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}
