use thiserror::Error;

/// Which of the two fetch operations an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Categories,
    Dishes,
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchKind::Categories => f.write_str("categories"),
            FetchKind::Dishes => f.write_str("dishes"),
        }
    }
}

/// Everything a fetch can fail with. All variants surface to the UI as the
/// rendered message string; none carry a recovery path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuApiError {
    #[error("error fetching {kind}: {detail}")]
    Transport { kind: FetchKind, detail: String },
    #[error("no data returned while fetching {kind}")]
    EmptyResponse { kind: FetchKind },
    #[error("error decoding {kind}: {detail}")]
    Decode { kind: FetchKind, detail: String },
    #[error("status was false in the {kind} response")]
    Status { kind: FetchKind },
    #[error("invalid request: {0}")]
    Validation(String),
}
