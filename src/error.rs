use axum::http::StatusCode;
use thiserror::Error;

/// Failure conditions for one scrape round trip. The source sites give no
/// machine-readable error signal, so each condition carries its own tag for
/// the response payload.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("missing `type` query parameter")]
    MissingType,

    #[error("unsupported lottery type: {0}")]
    UnsupportedType(String),

    #[error("no source URL configured for {0}")]
    MissingSourceUrl(&'static str),

    #[error("source unreachable: {0}")]
    SourceUnreachable(#[from] reqwest::Error),

    #[error("expected result container not found on the {0} page")]
    LayoutMismatch(&'static str),
}

impl ScrapeError {
    /// Tag carried in the response payload's `Status` field.
    pub fn status_tag(&self) -> &'static str {
        match self {
            ScrapeError::MissingType => "MISSING_TYPE",
            ScrapeError::UnsupportedType(_) => "UNSUPPORTED_TYPE",
            ScrapeError::MissingSourceUrl(_) => "MISSING_SOURCE_URL",
            ScrapeError::SourceUnreachable(_) => "SOURCE_UNREACHABLE",
            ScrapeError::LayoutMismatch(_) => "LAYOUT_MISMATCH",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ScrapeError::MissingType | ScrapeError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            ScrapeError::MissingSourceUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScrapeError::SourceUnreachable(_) | ScrapeError::LayoutMismatch(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_condition_has_distinct_tag() {
        let tags = [
            ScrapeError::MissingType.status_tag(),
            ScrapeError::UnsupportedType("X".to_string()).status_tag(),
            ScrapeError::MissingSourceUrl("KENO").status_tag(),
            ScrapeError::LayoutMismatch("KENO").status_tag(),
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
