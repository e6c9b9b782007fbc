use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("sitemap XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid content selector \"{selector}\"")]
    InvalidSelector { selector: String },

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
