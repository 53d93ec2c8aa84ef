use chrono::{DateTime, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Placeholder for a scalar field the extractor ran on but could not find.
pub const NOT_FOUND: &str = "Not found";

/// Placeholder for list fields (and `experience`) with no match.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Structured candidate information pulled out of one resume.
///
/// Every field is always populated: absence is a sentinel, never a missing key.
/// `skills` and `tools` are deduplicated, title-cased and sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Domain part of `email`.
    pub domain: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub experience: String,
    pub filename: String,
}

/// Outcome for a single uploaded document. Independent of every other
/// document in the same batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Success {
        filename: String,
        fields: ResumeFields,
    },
    Failure {
        filename: String,
        error: String,
    },
}

impl ParseResult {
    pub fn filename(&self) -> &str {
        match self {
            ParseResult::Success { filename, .. } | ParseResult::Failure { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }
}

/// Wire shape: `{filename, success: true, data}` or `{filename, success: false, error}`.
impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseResult", 3)?;
        match self {
            ParseResult::Success { filename, fields } => {
                state.serialize_field("filename", filename)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", fields)?;
            }
            ParseResult::Failure { filename, error } => {
                state.serialize_field("filename", filename)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Response body of `POST /api/parse-resumes`; `results` follows upload order.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub results: Vec<ParseResult>,
    pub processed_at: DateTime<Utc>,
}
