//! Summary file naming and content rendering.
//!
//! A summary file is named
//!
//! ```text
//! summary_<sanitized name>_<YYYY-MM-DD_HH-MM-SS>.txt
//! ```
//!
//! and contains a fixed plain-text template recording the name, topic, and
//! creation time.  Everything here is a pure function of its inputs; the
//! caller reads the clock once and passes the same instant to both
//! [`summary_file_name`] and [`render_summary`].

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Prefix shared by every generated summary file.
pub const FILE_PREFIX: &str = "summary_";

/// Extension shared by every generated summary file.
pub const FILE_EXTENSION: &str = "txt";

/// `strftime` pattern for the timestamp embedded in the file name.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// ISO-8601 pattern (second precision, no offset) for the `Created:` line.
const CREATED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A summary file found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// File name only, e.g. `summary_Ada_2024-03-09_14-05-07.txt`.
    pub name: String,
    /// Absolute path to the file.
    pub path: PathBuf,
}

/// Outcome of generating one summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSummary {
    /// The effective name written into the file (after default resolution).
    pub name: String,
    /// The effective topic written into the file (after default resolution).
    pub topic: String,
    /// Absolute path of the written file.
    pub path: PathBuf,
}

/// Makes `name` safe to embed in a file name.
///
/// Surrounding whitespace is trimmed, then every whitespace character, path
/// separator, Windows-reserved character (`: * ? " < > |`) and control
/// character is replaced with `_`.  The result never contains a separator, so
/// a summary can only be written directly inside the output directory.
///
/// # Example
///
/// ```rust
/// use summary_core::domain::sanitize_name;
///
/// assert_eq!(sanitize_name("  Ada Lovelace "), "Ada_Lovelace");
/// assert_eq!(sanitize_name("../etc/passwd"), ".._etc_passwd");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || is_reserved(c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Builds the file name for a summary created for `name` at `timestamp`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use summary_core::domain::summary_file_name;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 5, 7).unwrap();
/// assert_eq!(
///     summary_file_name("Ada Lovelace", ts),
///     "summary_Ada_Lovelace_2024-03-09_14-05-07.txt"
/// );
/// ```
pub fn summary_file_name(name: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{FILE_PREFIX}{}_{}.{FILE_EXTENSION}",
        sanitize_name(name),
        timestamp.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Renders the text content of a summary file.
///
/// `name` and `topic` are written exactly as given; only the file name is
/// sanitized.
pub fn render_summary(name: &str, topic: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "Simple Summary Generator\n\
         ==========================\n\
         \n\
         Name: {name}\n\
         Topic: {topic}\n\
         Created: {}\n",
        timestamp.format(CREATED_TIMESTAMP_FORMAT)
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    // ── sanitize_name ─────────────────────────────────────────────────────────

    #[test]
    fn test_sanitize_name_trims_and_replaces_spaces() {
        assert_eq!(sanitize_name("  Example User  "), "Example_User");
    }

    #[test]
    fn test_sanitize_name_replaces_every_inner_space() {
        assert_eq!(sanitize_name("a  b c"), "a__b_c");
    }

    #[test]
    fn test_sanitize_name_replaces_tabs_and_newlines() {
        assert_eq!(sanitize_name("a\tb\nc"), "a_b_c");
    }

    #[test]
    fn test_sanitize_name_replaces_path_separators() {
        // Arrange / Act
        let safe = sanitize_name("../../etc/passwd");

        // Assert: no separator survives, so the file stays in the output dir
        assert!(!safe.contains('/'));
        assert_eq!(safe, ".._.._etc_passwd");
    }

    #[test]
    fn test_sanitize_name_replaces_windows_reserved_characters() {
        assert_eq!(sanitize_name(r#"a\b:c*d?e"f<g>h|i"#), "a_b_c_d_e_f_g_h_i");
    }

    #[test]
    fn test_sanitize_name_keeps_unicode_letters() {
        assert_eq!(sanitize_name("José Müller"), "José_Müller");
    }

    #[test]
    fn test_sanitize_name_of_blank_input_is_empty() {
        assert_eq!(sanitize_name("   "), "");
    }

    // ── summary_file_name ─────────────────────────────────────────────────────

    #[test]
    fn test_summary_file_name_format() {
        assert_eq!(
            summary_file_name("Example User", ts()),
            "summary_Example_User_2024-03-09_14-05-07.txt"
        );
    }

    #[test]
    fn test_summary_file_name_zero_pads_fields() {
        let early = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(
            summary_file_name("x", early),
            "summary_x_2025-01-02_03-04-05.txt"
        );
    }

    #[test]
    fn test_summary_file_name_sorts_chronologically_for_same_name() {
        let later = ts() + chrono::Duration::seconds(1);
        assert!(summary_file_name("Ada", ts()) < summary_file_name("Ada", later));
    }

    // ── render_summary ────────────────────────────────────────────────────────

    #[test]
    fn test_render_summary_matches_template() {
        // Act
        let content = render_summary("Example User", "Testing the CLI", ts());

        // Assert
        let expected = "Simple Summary Generator\n\
                        ==========================\n\
                        \n\
                        Name: Example User\n\
                        Topic: Testing the CLI\n\
                        Created: 2024-03-09T14:05:07\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_render_summary_keeps_name_unsanitized() {
        let content = render_summary("  Ada / Lovelace ", "t", ts());
        assert!(content.contains("Name:   Ada / Lovelace \n"));
    }
}
