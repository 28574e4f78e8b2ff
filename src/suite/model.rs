//! Suite description data model
//!
//! Defines the data structures for deserializing YAML suite files. The tree
//! is validated once at load time and never mutated afterwards.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};

/// A leaf test: one script invocation with optional arguments
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Test {
    /// Script path, relative to the library root
    pub script: String,
    /// Argument string appended to the script command line
    pub args: Option<String>,
    /// Human readable description shown instead of the script name
    pub description: Option<String>,
}

impl Test {
    /// Invocation signature identifying this test for result caching
    ///
    /// Two tests with the same script and the same arguments are the same
    /// test for caching purposes, wherever they appear in the tree.
    pub fn signature(&self) -> (&str, &str) {
        (&self.script, self.args.as_deref().unwrap_or(""))
    }
}

/// A named tree node grouping tests and/or subcategories
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Category name, matched case-insensitively during resolution
    #[serde(rename = "category")]
    pub name: String,

    /// Optional description shown under the report header
    pub description: Option<String>,

    /// Tests defined at this node, run in declaration order
    #[serde(default, rename = "test")]
    pub tests: Vec<Test>,

    /// Nested subcategories
    ///
    /// An absent `test-suite` key is not the same as an empty list: a node
    /// without the key becomes its own scope during path resolution.
    #[serde(rename = "test-suite")]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// Whether any test is defined directly at this node
    ///
    /// Distinguishes KO from PARTIAL when a child fails: a category owning
    /// no tests cannot be partially successful.
    pub fn has_local_tests(&self) -> bool {
        !self.tests.is_empty()
    }
}

/// The ordered forest of top level categories loaded from a suite file
#[derive(Debug, Clone)]
pub struct SuiteTree {
    pub categories: Vec<Category>,
}

impl SuiteTree {
    /// Load and validate a suite description from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SuiteFileMissing(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        let categories: Vec<Category> =
            serde_yaml::from_str(&content).map_err(|e| Error::SuiteParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let tree = Self { categories };
        tree.validate()?;
        Ok(tree)
    }

    /// Reject malformed trees up front instead of failing deep in recursion
    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::SuiteInvalid(
                "the suite defines no category".to_string(),
            ));
        }
        for category in &self.categories {
            validate_category(category)?;
        }
        Ok(())
    }
}

fn validate_category(category: &Category) -> Result<()> {
    if category.name.is_empty() {
        return Err(Error::SuiteInvalid(
            "a category has an empty name".to_string(),
        ));
    }
    if category.name.contains(':') {
        return Err(Error::SuiteInvalid(format!(
            "category name '{}' contains ':', the path separator",
            category.name
        )));
    }
    for test in &category.tests {
        if test.script.is_empty() {
            return Err(Error::SuiteInvalid(format!(
                "a test of category '{}' has an empty script path",
                category.name
            )));
        }
    }
    for child in category.children.as_deref().unwrap_or_default() {
        validate_category(child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_str(content: &str) -> Result<SuiteTree> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        SuiteTree::load(file.path())
    }

    #[test]
    fn test_load_nested_suite() {
        let tree = load_str(
            r#"
- category: network
  description: Network checks
  test:
    - script: ping.sh
      args: "-c 1 localhost"
      description: Ping localhost
  test-suite:
    - category: dns
      test:
        - script: dns.sh
"#,
        )
        .unwrap();

        assert_eq!(tree.categories.len(), 1);
        let network = &tree.categories[0];
        assert_eq!(network.name, "network");
        assert_eq!(network.description.as_deref(), Some("Network checks"));
        assert_eq!(network.tests.len(), 1);
        assert_eq!(network.tests[0].signature(), ("ping.sh", "-c 1 localhost"));

        let children = network.children.as_deref().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "dns");
        assert_eq!(children[0].tests[0].signature(), ("dns.sh", ""));
        assert!(children[0].children.is_none());
    }

    #[test]
    fn test_empty_child_list_is_kept_distinct_from_absent() {
        let tree = load_str("- category: a\n  test-suite: []\n").unwrap();
        let children = tree.categories[0].children.as_deref().unwrap();
        assert!(children.is_empty());

        let tree = load_str("- category: a\n").unwrap();
        assert!(tree.categories[0].children.is_none());
    }

    #[test]
    fn test_category_without_tests_or_children_is_valid() {
        let tree = load_str("- category: empty\n").unwrap();
        assert!(!tree.categories[0].has_local_tests());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = load_str("- category: a\n  scripts:\n    - foo.sh\n");
        assert!(matches!(result, Err(Error::SuiteParse { .. })));
    }

    #[test]
    fn test_name_with_colon_is_rejected() {
        let result = load_str("- category: \"a:b\"\n");
        assert!(matches!(result, Err(Error::SuiteInvalid(_))));
    }

    #[test]
    fn test_empty_suite_is_rejected() {
        let result = load_str("[]\n");
        assert!(matches!(result, Err(Error::SuiteInvalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SuiteTree::load(&dir.path().join("absent.yml"));
        assert!(matches!(result, Err(Error::SuiteFileMissing(_))));
    }
}
