use regex::Regex;
use serde::{Deserialize, Serialize};

/// How aggressively to look for SQL inside completion text. The two modes
/// disagree on inputs where prose happens to contain a keyword-prefixed,
/// semicolon-terminated clause; which one applies is a deliberate
/// configuration choice, never an internal default.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Only a fenced ```sql block counts.
    Strict,
    /// A bare keyword-prefixed statement up to the first semicolon counts
    /// too, with the fenced block as fallback.
    #[default]
    Lenient,
}

pub struct SqlExtractor {
    mode: ExtractionMode,
    fenced: Regex,
    statement: Regex,
}

impl SqlExtractor {
    pub fn new(mode: ExtractionMode) -> Self {
        Self {
            mode,
            // The fence must be exactly ```sql, body delimited by newlines.
            fenced: Regex::new(r"(?s)```sql\n(.*)\n```").expect("fenced pattern is valid"),
            statement: Regex::new(
                r"(?is)\b(?:select|insert|update|delete|create|drop|alter|with)\b.*?;",
            )
            .expect("statement pattern is valid"),
        }
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Scan free-form completion text for an embedded SQL statement.
    /// `None` means the response is a text-only answer, not an error.
    pub fn extract(&self, response_text: &str) -> Option<String> {
        match self.mode {
            ExtractionMode::Strict => self.extract_fenced(response_text),
            ExtractionMode::Lenient => self
                .statement
                .find(response_text)
                .map(|matched| matched.as_str().trim().to_string())
                .or_else(|| {
                    self.extract_fenced(response_text)
                        .map(|body| body.trim().to_string())
                }),
        }
    }

    fn extract_fenced(&self, response_text: &str) -> Option<String> {
        self.fenced
            .captures(response_text)
            .map(|captures| captures[1].to_string())
    }
}

impl Default for SqlExtractor {
    fn default() -> Self {
        Self::new(ExtractionMode::default())
    }
}
