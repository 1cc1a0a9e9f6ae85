//! Feedback records and the rules a submission must satisfy.
//!
//! Submissions are validated in a fixed order: both fields present, category
//! known, trimmed content long enough, raw content short enough. The first
//! failing rule wins and nothing is written.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of characters in trimmed content.
pub const MIN_CONTENT_CHARS: usize = 10;
/// Maximum number of characters in raw content.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Feedback category.
///
/// Variants are declared in name order so the derived `Ord` sorts them the
/// same way the store sorts the text values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// "Que bom": something that went well.
    QueBom,
    /// "Que pena": something that went badly.
    QuePena,
    /// "Que tal": a suggestion.
    QueTal,
}

impl FeedbackCategory {
    /// Every category, in name order.
    pub const ALL: [Self; 3] = [Self::QueBom, Self::QuePena, Self::QueTal];

    /// Stored and serialised name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QueBom => "que_bom",
            Self::QuePena => "que_pena",
            Self::QueTal => "que_tal",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback category: {input}")]
pub struct ParseFeedbackCategoryError {
    /// Rejected input.
    pub input: String,
}

impl FromStr for FeedbackCategory {
    type Err = ParseFeedbackCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseFeedbackCategoryError {
                input: s.to_owned(),
            })
    }
}

/// Store-assigned feedback identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    /// The `category` field.
    Category,
    /// The `content` field.
    Content,
}

impl FeedbackField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Content => "content",
        }
    }
}

/// Reasons a submission is rejected. `Display` yields the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackValidationError {
    /// A required field was absent or empty.
    #[error("Categoria e conteúdo são obrigatórios")]
    MissingField {
        /// First missing field.
        field: FeedbackField,
    },
    /// The category is not one of the known values.
    #[error("Categoria inválida")]
    InvalidCategory {
        /// Rejected category text.
        value: String,
    },
    /// Trimmed content is shorter than [`MIN_CONTENT_CHARS`].
    #[error("Feedback deve ter no mínimo 10 caracteres")]
    ContentTooShort {
        /// Character count after trimming.
        length: usize,
    },
    /// Raw content is longer than [`MAX_CONTENT_CHARS`].
    #[error("Feedback deve ter no máximo 1000 caracteres")]
    ContentTooLong {
        /// Character count before trimming.
        length: usize,
    },
}

impl FeedbackValidationError {
    /// Field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> FeedbackField {
        match self {
            Self::MissingField { field } => *field,
            Self::InvalidCategory { .. } => FeedbackField::Category,
            Self::ContentTooShort { .. } | Self::ContentTooLong { .. } => FeedbackField::Content,
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidCategory { .. } => "invalid_category",
            Self::ContentTooShort { .. } => "content_too_short",
            Self::ContentTooLong { .. } => "content_too_long",
        }
    }
}

/// Trimmed feedback text within the accepted length range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackContent(String);

impl FeedbackContent {
    /// Validate and trim raw content.
    ///
    /// The lower bound applies to the trimmed text and the upper bound to the
    /// raw text, so surrounding whitespace counts against the maximum.
    ///
    /// # Errors
    /// Returns [`FeedbackValidationError::ContentTooShort`] or
    /// [`FeedbackValidationError::ContentTooLong`].
    ///
    /// # Examples
    /// ```
    /// use feedback_backend::domain::FeedbackContent;
    ///
    /// let content = FeedbackContent::new("  Great service overall!  ").expect("valid");
    /// assert_eq!(content.as_str(), "Great service overall!");
    /// assert!(FeedbackContent::new("short").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, FeedbackValidationError> {
        let trimmed = raw.trim();
        let trimmed_length = trimmed.chars().count();
        if trimmed_length < MIN_CONTENT_CHARS {
            return Err(FeedbackValidationError::ContentTooShort {
                length: trimmed_length,
            });
        }
        let raw_length = raw.chars().count();
        if raw_length > MAX_CONTENT_CHARS {
            return Err(FeedbackValidationError::ContentTooLong { length: raw_length });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    category: FeedbackCategory,
    content: FeedbackContent,
}

impl FeedbackDraft {
    /// Build a draft from already validated parts.
    #[must_use]
    pub const fn new(category: FeedbackCategory, content: FeedbackContent) -> Self {
        Self { category, content }
    }

    /// Validate raw request fields in submission order.
    ///
    /// Absent and empty strings both count as missing.
    ///
    /// # Errors
    /// Returns the first [`FeedbackValidationError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use feedback_backend::domain::{FeedbackCategory, FeedbackDraft, FeedbackValidationError};
    ///
    /// let draft = FeedbackDraft::parse(Some("que_tal"), Some("Could we add dark mode?"))
    ///     .expect("valid submission");
    /// assert_eq!(draft.category(), FeedbackCategory::QueTal);
    ///
    /// let err = FeedbackDraft::parse(Some("bogus"), Some("1234567890")).unwrap_err();
    /// assert!(matches!(err, FeedbackValidationError::InvalidCategory { .. }));
    /// ```
    pub fn parse(
        category: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, FeedbackValidationError> {
        let category = category.filter(|value| !value.is_empty());
        let content = content.filter(|value| !value.is_empty());
        let (Some(raw_category), Some(raw_content)) = (category, content) else {
            let field = if category.is_none() {
                FeedbackField::Category
            } else {
                FeedbackField::Content
            };
            return Err(FeedbackValidationError::MissingField { field });
        };

        let category = raw_category.parse::<FeedbackCategory>().map_err(|err| {
            FeedbackValidationError::InvalidCategory { value: err.input }
        })?;
        let content = FeedbackContent::new(raw_content)?;
        Ok(Self::new(category, content))
    }

    /// Category of the submission.
    #[must_use]
    pub const fn category(&self) -> FeedbackCategory {
        self.category
    }

    /// Trimmed content of the submission.
    #[must_use]
    pub const fn content(&self) -> &FeedbackContent {
        &self.content
    }
}

/// Stored feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    id: FeedbackId,
    category: FeedbackCategory,
    content: FeedbackContent,
    created_at: DateTime<Utc>,
}

impl Feedback {
    /// Assemble a record from its stored parts.
    #[must_use]
    pub fn new(id: FeedbackId, draft: FeedbackDraft, created_at: DateTime<Utc>) -> Self {
        let FeedbackDraft { category, content } = draft;
        Self {
            id,
            category,
            content,
            created_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> FeedbackId {
        self.id
    }

    /// Category.
    #[must_use]
    pub const fn category(&self) -> FeedbackCategory {
        self.category
    }

    /// Trimmed content.
    #[must_use]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Insertion timestamp assigned by the store.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Optional category filter applied to listing and export.
///
/// The value is matched verbatim and not validated, so an unknown category
/// selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    category: Option<String>,
}

impl FeedbackFilter {
    /// Filter matching every record.
    #[must_use]
    pub const fn all() -> Self {
        Self { category: None }
    }

    /// Build a filter from a query value; empty text means no filter.
    #[must_use]
    pub fn from_query(category: Option<String>) -> Self {
        Self {
            category: category.filter(|value| !value.is_empty()),
        }
    }

    /// Category text to match, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether `feedback` passes the filter.
    #[must_use]
    pub fn matches(&self, feedback: &Feedback) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| feedback.category().as_str() == category)
    }
}

/// Default page size for listings.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Limit/offset window over a listing.
///
/// No upper bound is enforced on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of rows to return.
    pub limit: u64,
    /// Number of rows to skip.
    pub offset: u64,
}

impl PageRequest {
    /// Build a window, falling back to the defaults for absent values.
    #[must_use]
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn repeat(ch: char, count: usize) -> String {
        std::iter::repeat_n(ch, count).collect()
    }

    #[rstest]
    #[case("que_bom", FeedbackCategory::QueBom)]
    #[case("que_pena", FeedbackCategory::QuePena)]
    #[case("que_tal", FeedbackCategory::QueTal)]
    fn category_parses_known_names(#[case] input: &str, #[case] expected: FeedbackCategory) {
        assert_eq!(input.parse::<FeedbackCategory>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("QUE_BOM")]
    #[case("bogus")]
    #[case(" que_bom")]
    fn category_rejects_other_text(#[case] input: &str) {
        let err = input.parse::<FeedbackCategory>().expect_err("unknown category");
        assert_eq!(err.input, input);
    }

    #[rstest]
    fn category_order_follows_names() {
        let mut sorted = FeedbackCategory::ALL;
        sorted.sort_by_key(|category| category.as_str());
        assert_eq!(sorted, FeedbackCategory::ALL);
    }

    #[rstest]
    #[case(None, Some("Great service overall!"), FeedbackField::Category)]
    #[case(Some(""), Some("Great service overall!"), FeedbackField::Category)]
    #[case(Some("que_bom"), None, FeedbackField::Content)]
    #[case(Some("que_bom"), Some(""), FeedbackField::Content)]
    #[case(None, None, FeedbackField::Category)]
    fn parse_reports_missing_fields(
        #[case] category: Option<&str>,
        #[case] content: Option<&str>,
        #[case] field: FeedbackField,
    ) {
        let err = FeedbackDraft::parse(category, content).expect_err("missing field");
        assert_eq!(err, FeedbackValidationError::MissingField { field });
        assert_eq!(err.to_string(), "Categoria e conteúdo são obrigatórios");
    }

    #[rstest]
    fn parse_checks_category_before_content() {
        let err = FeedbackDraft::parse(Some("bogus"), Some("short")).expect_err("invalid");
        assert_eq!(
            err,
            FeedbackValidationError::InvalidCategory {
                value: "bogus".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Categoria inválida");
    }

    #[rstest]
    fn parse_rejects_short_trimmed_content() {
        let err = FeedbackDraft::parse(Some("que_tal"), Some("   short    ")).expect_err("short");
        assert_eq!(err, FeedbackValidationError::ContentTooShort { length: 5 });
        assert_eq!(err.to_string(), "Feedback deve ter no mínimo 10 caracteres");
    }

    #[rstest]
    fn whitespace_only_content_is_too_short_not_missing() {
        let err = FeedbackDraft::parse(Some("que_tal"), Some("    ")).expect_err("short");
        assert_eq!(err.code(), "content_too_short");
    }

    #[rstest]
    fn content_bounds_are_inclusive() {
        let lower = repeat('a', MIN_CONTENT_CHARS);
        let upper = repeat('a', MAX_CONTENT_CHARS);
        assert!(FeedbackContent::new(&lower).is_ok());
        assert!(FeedbackContent::new(&upper).is_ok());
    }

    #[rstest]
    fn raw_length_counts_surrounding_whitespace() {
        let raw = format!("  {}", repeat('a', MAX_CONTENT_CHARS - 1));
        let err = FeedbackContent::new(&raw).expect_err("too long once padded");
        assert_eq!(
            err,
            FeedbackValidationError::ContentTooLong {
                length: MAX_CONTENT_CHARS + 1
            }
        );
        assert_eq!(err.to_string(), "Feedback deve ter no máximo 1000 caracteres");
    }

    #[rstest]
    fn lengths_count_characters_not_bytes() {
        let accented = repeat('é', MIN_CONTENT_CHARS);
        assert!(FeedbackContent::new(&accented).is_ok());
        let long = repeat('é', MAX_CONTENT_CHARS);
        assert!(FeedbackContent::new(&long).is_ok());
    }

    #[rstest]
    fn parse_trims_content() {
        let draft = FeedbackDraft::parse(Some("que_bom"), Some("  Great service overall!\n"))
            .expect("valid");
        assert_eq!(draft.category(), FeedbackCategory::QueBom);
        assert_eq!(draft.content().as_str(), "Great service overall!");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(String::new()), None)]
    #[case(Some("que_tal".to_owned()), Some("que_tal"))]
    #[case(Some("bogus".to_owned()), Some("bogus"))]
    fn filter_normalises_query_values(
        #[case] input: Option<String>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(FeedbackFilter::from_query(input).category(), expected);
    }

    #[rstest]
    fn page_request_defaults() {
        assert_eq!(
            PageRequest::default(),
            PageRequest {
                limit: DEFAULT_PAGE_LIMIT,
                offset: 0
            }
        );
        assert_eq!(PageRequest::new(Some(5), Some(10)).offset, 10);
    }

    #[rstest]
    fn feedback_serialises_snake_case_record() {
        let created_at = DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        let draft = FeedbackDraft::parse(Some("que_pena"), Some("The queue was far too long"))
            .expect("valid");
        let feedback = Feedback::new(FeedbackId::new(7), draft, created_at);

        let value = serde_json::to_value(&feedback).expect("serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "category": "que_pena",
                "content": "The queue was far too long",
                "created_at": "2026-10-19T12:00:00Z",
            })
        );
    }
}
