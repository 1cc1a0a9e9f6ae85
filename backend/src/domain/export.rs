//! Rendering of downloadable feedback exports.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::Feedback;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "ID,Categoria,Conteúdo,Data";

/// Download format requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON array of records.
    #[default]
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    /// Interpret the `format` query value. Anything but `csv` selects JSON.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("csv") => Self::Csv,
            _ => Self::Json,
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// MIME type of the rendered body.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

/// Rendered export ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Format of `body`.
    pub format: ExportFormat,
    /// Suggested download name.
    pub file_name: String,
    /// Rendered content.
    pub body: String,
}

/// Download name stamped with `now` in Unix milliseconds.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use feedback_backend::domain::{ExportFormat, export_file_name};
///
/// let now = DateTime::from_timestamp_millis(1_760_000_000_123).expect("timestamp");
/// assert_eq!(export_file_name(ExportFormat::Csv, now), "feedbacks_1760000000123.csv");
/// ```
#[must_use]
pub fn export_file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!(
        "feedbacks_{}.{}",
        now.timestamp_millis(),
        format.extension()
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_line(feedback: &Feedback) -> String {
    let created_at = feedback
        .created_at()
        .to_rfc3339_opts(SecondsFormat::AutoSi, true);
    format!(
        "{},{},{},{}",
        feedback.id(),
        quote(feedback.category().as_str()),
        quote(feedback.content()),
        quote(&created_at)
    )
}

/// Render records as CSV.
///
/// Text columns are always quoted with inner quotes doubled. Lines are joined
/// with `\n` and there is no trailing newline.
#[must_use]
pub fn render_csv(records: &[Feedback]) -> String {
    std::iter::once(CSV_HEADER.to_owned())
        .chain(records.iter().map(csv_line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render records as a JSON array.
///
/// # Errors
/// Propagates serialisation failures from `serde_json`.
pub fn render_json(records: &[Feedback]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Render records in `format`.
///
/// # Errors
/// Propagates serialisation failures from `serde_json`.
pub fn render(format: ExportFormat, records: &[Feedback]) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Json => render_json(records),
        ExportFormat::Csv => Ok(render_csv(records)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedbackDraft, FeedbackId};
    use rstest::rstest;

    fn feedback(id: i64, category: &str, content: &str) -> Feedback {
        let created_at = DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        let draft = FeedbackDraft::parse(Some(category), Some(content)).expect("valid draft");
        Feedback::new(FeedbackId::new(id), draft, created_at)
    }

    /// Minimal reader for the quoting rules `render_csv` emits.
    fn parse_csv_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut quoted = false;
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            match (ch, quoted) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                ('"', _) => quoted = !quoted,
                (',', false) => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        fields.push(current);
        fields
    }

    #[rstest]
    #[case(None, ExportFormat::Json)]
    #[case(Some("json"), ExportFormat::Json)]
    #[case(Some("csv"), ExportFormat::Csv)]
    #[case(Some("CSV"), ExportFormat::Json)]
    #[case(Some("xml"), ExportFormat::Json)]
    fn format_falls_back_to_json(#[case] input: Option<&str>, #[case] expected: ExportFormat) {
        assert_eq!(ExportFormat::from_query(input), expected);
    }

    #[rstest]
    fn csv_has_header_and_no_trailing_newline() {
        let rows = [
            feedback(2, "que_tal", "Could we add dark mode?"),
            feedback(1, "que_bom", "Great service overall!"),
        ];

        let csv = render_csv(&rows);

        assert_eq!(
            csv,
            concat!(
                "ID,Categoria,Conteúdo,Data\n",
                "2,\"que_tal\",\"Could we add dark mode?\",\"2026-10-19T09:30:00Z\"\n",
                "1,\"que_bom\",\"Great service overall!\",\"2026-10-19T09:30:00Z\""
            )
        );
    }

    #[rstest]
    fn csv_of_nothing_is_just_the_header() {
        assert_eq!(render_csv(&[]), CSV_HEADER);
    }

    #[rstest]
    fn csv_quotes_round_trip() {
        let content = r#"She said "ok", then "fine""#;
        let rows = [feedback(5, "que_pena", content)];

        let csv = render_csv(&rows);
        let line = csv.lines().nth(1).expect("data line");
        let fields = parse_csv_line(line);

        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get(2).map(String::as_str), Some(content));
    }

    #[rstest]
    fn json_render_is_a_record_array() {
        let rows = [feedback(3, "que_bom", "Great service overall!")];
        let body = render(ExportFormat::Json, &rows).expect("json renders");
        let value: serde_json::Value = serde_json::from_str(&body).expect("valid json");
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["category"], "que_bom");
    }
}
