use lazy_static::lazy_static;
use regex::Regex;

use crate::core::FileFacts;

lazy_static! {
    // Module-level `import a.b` / `from .pkg import x` -> the module part only
    static ref IMPORT: Regex = Regex::new(r"^(?:from|import)\s+([\w.]+)").unwrap();
    static ref DEF: Regex = Regex::new(r"^(\s*)(?:async\s+)?def\s+([A-Za-z_]\w*)").unwrap();
    static ref CLASS: Regex = Regex::new(r"^(\s*)class\s+([A-Za-z_]\w*)").unwrap();
}

/// Line-based Python fact extraction.
///
/// Top-level (unindented) functions and classes are treated as exports.
pub fn parse(content: &str) -> FileFacts {
    let mut facts = FileFacts::default();

    for line in content.lines() {
        if let Some(caps) = IMPORT.captures(line) {
            facts.imports.push(caps[1].to_string());
            continue;
        }
        if let Some(caps) = DEF.captures(line) {
            let name = caps[2].to_string();
            if caps[1].is_empty() {
                facts.exports.push(name.clone());
            }
            facts.functions.push(name);
            continue;
        }
        if let Some(caps) = CLASS.captures(line) {
            let name = caps[2].to_string();
            if caps[1].is_empty() {
                facts.exports.push(name.clone());
            }
            facts.classes.push(name);
        }
    }

    facts.imports = super::dedup_in_order(facts.imports);
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports() {
        let code = r"
import os
from flask import Flask
import numpy as np
from .models import User
import os
";
        let facts = parse(code);
        assert_eq!(facts.imports, vec!["os", "flask", "numpy", ".models"]);
    }

    #[test]
    fn test_indented_imports_are_skipped() {
        let code = r"
try:
    import ujson as json
except ImportError:
    import json

def load():
    from cache import store
";
        let facts = parse(code);
        assert!(facts.imports.is_empty());
        assert_eq!(facts.functions, vec!["load"]);
    }

    #[test]
    fn test_functions_and_classes() {
        let code = r"
def my_function():
    pass

class MyClass:
    def method(self):
        pass

async def fetch():
    pass
";
        let facts = parse(code);
        assert_eq!(facts.functions, vec!["my_function", "method", "fetch"]);
        assert_eq!(facts.classes, vec!["MyClass"]);
        assert_eq!(facts.exports, vec!["my_function", "MyClass", "fetch"]);
    }
}
