//! Centralized filename parsing: stem/extension helpers and the
//! per-run stem field parser.
//!
//! Every stage that looks at a filename goes through this module, so
//! the scanner's extension filter and the `ext` column can never
//! disagree on normalization.
//!
//! ## Stem parsing modes
//!
//! A run uses exactly one of three modes, chosen once from the CLI:
//!
//! - **Regex**: a pattern with named capture groups, matched against
//!   the stem anchored at the start. `(?P<sujet>[^_]+)_(?P<age>\d+)`
//!   against `felix_03_M_rec1` yields `sujet=felix`, `age=03`. A
//!   non-matching stem still yields every declared group, valueless —
//!   rows must never be missing a column other rows have.
//! - **Token split**: the stem is split on a literal delimiter;
//!   `a_b_c` with `_` yields `token_1=a`, `token_2=b`, `token_3=c`.
//! - **None**: no extra fields.
//!
//! Regex wins when both a pattern and a delimiter are supplied.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

/// Lowercased extension with its leading dot (`.wav`), or an empty
/// string for extension-less files. Dotfiles like `.gitignore` count
/// as extension-less.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Filename without its extension. `clip.tar.gz` → `clip.tar`,
/// `.gitignore` → `.gitignore`.
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The run-wide stem parser, built once and applied to every file.
#[derive(Debug)]
pub enum FieldParser {
    /// Named-group pattern matched at the start of the stem.
    Pattern { regex: Regex, groups: Vec<String> },
    /// Literal-delimiter split into `token_1..token_n`.
    Split { delimiter: String },
    /// No stem parsing configured.
    None,
}

impl FieldParser {
    /// Select the parse mode from the CLI options. A pattern takes
    /// precedence over a delimiter when both are given.
    pub fn from_options(
        pattern: Option<&str>,
        delimiter: Option<&str>,
    ) -> Result<Self, ParseError> {
        if let Some(pattern) = pattern {
            let regex = Regex::new(pattern)?;
            let groups: Vec<String> = regex
                .capture_names()
                .flatten()
                .map(String::from)
                .collect();
            return Ok(Self::Pattern { regex, groups });
        }
        match delimiter {
            Some("") => Err(ParseError::EmptyDelimiter),
            Some(delimiter) => Ok(Self::Split {
                delimiter: delimiter.to_string(),
            }),
            None => Ok(Self::None),
        }
    }

    /// Named groups declared by the pattern, in declaration order.
    /// Empty for the split and none modes.
    pub fn group_names(&self) -> &[String] {
        match self {
            Self::Pattern { groups, .. } => groups,
            _ => &[],
        }
    }

    /// Decompose one stem into extracted fields.
    ///
    /// In pattern mode every declared group is present in the result;
    /// groups that did not capture map to `None`. In split mode every
    /// token is present as `token_N`. The schema pass in
    /// [`crate::table`] pads short token rows against the run-wide
    /// maximum.
    pub fn parse(&self, stem: &str) -> BTreeMap<String, Option<String>> {
        match self {
            Self::Pattern { regex, groups } => {
                let mut fields: BTreeMap<String, Option<String>> =
                    groups.iter().map(|g| (g.clone(), None)).collect();
                // Leftmost-match semantics: if the first match doesn't
                // start at offset 0, no match does, so this is exactly
                // a start-anchored match.
                let captures = regex
                    .captures(stem)
                    .filter(|c| c.get(0).is_some_and(|m| m.start() == 0));
                if let Some(captures) = captures {
                    for group in groups {
                        if let Some(value) = captures.name(group) {
                            fields.insert(group.clone(), Some(value.as_str().to_string()));
                        }
                    }
                }
                fields
            }
            Self::Split { delimiter } => stem
                .split(delimiter.as_str())
                .enumerate()
                .map(|(i, token)| (format!("token_{}", i + 1), Some(token.to_string())))
                .collect(),
            Self::None => BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(fields: &BTreeMap<String, Option<String>>, key: &str) -> Option<String> {
        fields.get(key).cloned().flatten()
    }

    // =========================================================================
    // Extension / stem helpers
    // =========================================================================

    #[test]
    fn extension_lowercased_with_dot() {
        assert_eq!(extension_of(Path::new("a/b/Clip.WAV")), ".wav");
        assert_eq!(extension_of(Path::new("song.mp3")), ".mp3");
    }

    #[test]
    fn extension_empty_when_missing() {
        assert_eq!(extension_of(Path::new("README")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
    }

    #[test]
    fn stem_drops_only_last_extension() {
        assert_eq!(stem_of(Path::new("clip.tar.gz")), "clip.tar");
        assert_eq!(stem_of(Path::new("felix_03.wav")), "felix_03");
    }

    #[test]
    fn stem_of_dotfile_is_full_name() {
        assert_eq!(stem_of(Path::new(".gitignore")), ".gitignore");
    }

    // =========================================================================
    // Mode selection
    // =========================================================================

    #[test]
    fn pattern_takes_precedence_over_delimiter() {
        let parser =
            FieldParser::from_options(Some(r"(?P<subject>[^_]+)"), Some("_")).unwrap();
        assert!(matches!(parser, FieldParser::Pattern { .. }));
    }

    #[test]
    fn no_options_means_no_parsing() {
        let parser = FieldParser::from_options(None, None).unwrap();
        assert!(matches!(parser, FieldParser::None));
        assert!(parser.parse("anything").is_empty());
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let result = FieldParser::from_options(Some("(?P<broken"), None);
        assert!(matches!(result, Err(ParseError::Pattern(_))));
    }

    #[test]
    fn empty_delimiter_is_config_error() {
        let result = FieldParser::from_options(None, Some(""));
        assert!(matches!(result, Err(ParseError::EmptyDelimiter)));
    }

    // =========================================================================
    // Pattern mode
    // =========================================================================

    #[test]
    fn named_groups_captured_from_matching_stem() {
        let parser = FieldParser::from_options(
            Some(r"(?P<sujet>[^_]+)_(?P<age>\d+)_(?P<gender>[MF])_.*"),
            None,
        )
        .unwrap();
        let fields = parser.parse("felix_03_M_rec1");
        assert_eq!(field(&fields, "sujet").as_deref(), Some("felix"));
        assert_eq!(field(&fields, "age").as_deref(), Some("03"));
        assert_eq!(field(&fields, "gender").as_deref(), Some("M"));
    }

    #[test]
    fn declared_groups_present_on_non_match() {
        let parser = FieldParser::from_options(
            Some(r"(?P<sujet>[^_]+)_(?P<age>\d+)"),
            None,
        )
        .unwrap();
        let fields = parser.parse("noseparators");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("sujet"), Some(&None));
        assert_eq!(fields.get("age"), Some(&None));
    }

    #[test]
    fn match_must_start_at_stem_start() {
        // "x-abc" contains "abc" but not at offset 0, mirroring
        // re.match rather than re.search.
        let parser = FieldParser::from_options(Some(r"(?P<word>abc)"), None).unwrap();
        let fields = parser.parse("x-abc");
        assert_eq!(fields.get("word"), Some(&None));

        let fields = parser.parse("abc-x");
        assert_eq!(field(&fields, "word").as_deref(), Some("abc"));
    }

    #[test]
    fn group_names_follow_declaration_order() {
        let parser = FieldParser::from_options(
            Some(r"(?P<zeta>\w)(?P<alpha>\w)"),
            None,
        )
        .unwrap();
        assert_eq!(parser.group_names(), ["zeta", "alpha"]);
    }

    #[test]
    fn unnamed_groups_are_ignored() {
        let parser =
            FieldParser::from_options(Some(r"(\d+)-(?P<name>\w+)"), None).unwrap();
        assert_eq!(parser.group_names(), ["name"]);
        let fields = parser.parse("12-dawn");
        assert_eq!(fields.len(), 1);
        assert_eq!(field(&fields, "name").as_deref(), Some("dawn"));
    }

    // =========================================================================
    // Split mode
    // =========================================================================

    #[test]
    fn tokens_numbered_from_one() {
        let parser = FieldParser::from_options(None, Some("_")).unwrap();
        let fields = parser.parse("a_b_c");
        assert_eq!(field(&fields, "token_1").as_deref(), Some("a"));
        assert_eq!(field(&fields, "token_2").as_deref(), Some("b"));
        assert_eq!(field(&fields, "token_3").as_deref(), Some("c"));
    }

    #[test]
    fn stem_without_delimiter_is_one_token() {
        let parser = FieldParser::from_options(None, Some("_")).unwrap();
        let fields = parser.parse("whole");
        assert_eq!(fields.len(), 1);
        assert_eq!(field(&fields, "token_1").as_deref(), Some("whole"));
    }

    #[test]
    fn adjacent_delimiters_yield_empty_tokens() {
        let parser = FieldParser::from_options(None, Some("_")).unwrap();
        let fields = parser.parse("a__b");
        assert_eq!(field(&fields, "token_2").as_deref(), Some(""));
        assert_eq!(field(&fields, "token_3").as_deref(), Some("b"));
    }

    #[test]
    fn multi_char_delimiter() {
        let parser = FieldParser::from_options(None, Some("--")).unwrap();
        let fields = parser.parse("take--two");
        assert_eq!(field(&fields, "token_1").as_deref(), Some("take"));
        assert_eq!(field(&fields, "token_2").as_deref(), Some("two"));
    }
}
