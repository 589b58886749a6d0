use thiserror::Error;

/// How much of the raw OCR text is echoed back on a failed parse
const EXCERPT_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum WatcherError {
    /// An import was attempted before a match was selected; nothing is parsed.
    #[error("no match selected - pick a match before importing stats")]
    NoMatchSelected,

    /// The required "us" rows could not be recovered from the recognized text.
    #[error("could not recover both of our half rows from the text: \"{excerpt}\"")]
    ParseIncomplete { excerpt: String },
}

impl WatcherError {
    pub fn parse_incomplete(raw_text: &str) -> Self {
        WatcherError::ParseIncomplete {
            excerpt: excerpt(raw_text),
        }
    }
}

/// First ~100 characters of the raw text, for operator diagnosis
pub fn excerpt(raw_text: &str) -> String {
    let trimmed = raw_text.trim();
    if trimmed.chars().count() <= EXCERPT_LEN {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(EXCERPT_LEN).collect();
    format!("{cut}...")
}
