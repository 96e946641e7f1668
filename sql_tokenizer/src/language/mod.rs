//! Editor registration metadata for the SQL language
//!
//! Plain data handed to the host editor: the language id and file
//! associations, comment and bracket configuration, and the highlighter
//! settings token scopes are derived from. Field names serialize in the
//! camelCase form editors expect.
use crate::tokens::TokenCategory;
use serde::{Deserialize, Serialize};

pub const LANGUAGE_ID: &str = "sql";

/// Suffix appended to every category tag to form a theme scope
pub const TOKEN_POSTFIX: &str = ".sql";

const EXTENSIONS: &[&str] = &[
    ".sql", ".hql", ".psql", ".tsql", ".jdbc", ".qmlsql", ".fql", ".ngql",
];
const ALIASES: &[&str] = &["sql", "hql", "SQL", "HQL"];
const MIMETYPES: &[&str] = &["application/json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRegistration {
    pub id: String,
    pub extensions: Vec<String>,
    pub aliases: Vec<String>,
    pub mimetypes: Vec<String>,
}

impl LanguageRegistration {
    /// Whether a file name carries one of the registered extensions
    pub fn matches_file(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    pub fn matches_alias(&self, name: &str) -> bool {
        self.id == name || self.aliases.iter().any(|alias| alias == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRule {
    pub line_comment: String,
    pub block_comment: (String, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfiguration {
    pub comments: CommentRule,
    pub brackets: Vec<(String, String)>,
    pub auto_closing_pairs: Vec<BracketPair>,
    pub surrounding_pairs: Vec<BracketPair>,
}

/// Bracket glyphs and the scope the highlighter gives them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketToken {
    pub open: String,
    pub close: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub default_token: String,
    pub token_postfix: String,
    pub ignore_case: bool,
    pub brackets: Vec<BracketToken>,
}

/// Everything the editor needs, in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageManifest {
    pub registration: LanguageRegistration,
    pub configuration: LanguageConfiguration,
    pub definition: LanguageDefinition,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn pairs(list: &[(&str, &str)]) -> Vec<BracketPair> {
    list.iter()
        .map(|(open, close)| BracketPair {
            open: open.to_string(),
            close: close.to_string(),
        })
        .collect()
}

pub fn registration() -> LanguageRegistration {
    LanguageRegistration {
        id: LANGUAGE_ID.to_string(),
        extensions: owned(EXTENSIONS),
        aliases: owned(ALIASES),
        mimetypes: owned(MIMETYPES),
    }
}

pub fn configuration() -> LanguageConfiguration {
    let quote_pairs = [
        ("{", "}"),
        ("[", "]"),
        ("(", ")"),
        ("\"", "\""),
        ("'", "'"),
    ];

    LanguageConfiguration {
        comments: CommentRule {
            line_comment: "--".to_string(),
            block_comment: ("/*".to_string(), "*/".to_string()),
        },
        brackets: [("{", "}"), ("[", "]"), ("(", ")")]
            .iter()
            .map(|(open, close)| (open.to_string(), close.to_string()))
            .collect(),
        auto_closing_pairs: pairs(&quote_pairs),
        surrounding_pairs: pairs(&quote_pairs),
    }
}

pub fn bracket_tokens() -> Vec<BracketToken> {
    vec![
        BracketToken {
            open: "[".to_string(),
            close: "]".to_string(),
            token: "delimiter.square".to_string(),
        },
        BracketToken {
            open: "(".to_string(),
            close: ")".to_string(),
            token: TokenCategory::DelimiterParenthesis.as_str().to_string(),
        },
    ]
}

pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        default_token: String::new(),
        token_postfix: TOKEN_POSTFIX.to_string(),
        ignore_case: true,
        brackets: bracket_tokens(),
    }
}

pub fn manifest() -> LanguageManifest {
    LanguageManifest {
        registration: registration(),
        configuration: configuration(),
        definition: definition(),
    }
}

/// Theme scope of a category, e.g. `keyword.try.sql`
pub fn theme_scope(category: TokenCategory) -> String {
    format!("{}{}", category.as_str(), TOKEN_POSTFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration() {
        let registration = registration();
        assert_eq!(registration.id, "sql");
        assert_eq!(registration.extensions.len(), 8);
        assert!(registration.matches_file("report.TSQL"));
        assert!(registration.matches_file("query.ngql"));
        assert!(!registration.matches_file("main.rs"));
        assert!(registration.matches_alias("HQL"));
        assert!(!registration.matches_alias("mysql"));
    }

    #[test]
    fn test_configuration_serializes_camel_case() {
        let json = serde_json::to_value(configuration()).unwrap();
        assert_eq!(json["comments"]["lineComment"], "--");
        assert_eq!(json["comments"]["blockComment"][1], "*/");
        assert_eq!(json["brackets"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["autoClosingPairs"][4]["open"], "'");
        assert_eq!(json["surroundingPairs"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_definition() {
        let definition = definition();
        assert!(definition.ignore_case);
        assert_eq!(definition.default_token, "");
        assert_eq!(definition.brackets[0].token, "delimiter.square");
        assert_eq!(definition.brackets[1].token, "delimiter.parenthesis");
    }

    #[test]
    fn test_theme_scope() {
        assert_eq!(theme_scope(TokenCategory::TryBlock), "keyword.try.sql");
        assert_eq!(theme_scope(TokenCategory::Whitespace), "white.sql");
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let manifest = manifest();
        let json = serde_json::to_string(&manifest).unwrap();
        let back: LanguageManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
