use thiserror::Error;

/// Errors that can occur while turning a workflow export into a model.
///
/// A well-formed but sparse document is never an error: missing nodes and
/// attributes resolve to empty strings in the model. The only fatal
/// conditions are a document that cannot be parsed into a tree at all, and
/// a pre-assembled payload that does not match the model shape.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse workflow XML: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("Pre-assembled model payload does not match the workflow model shape: {0}")]
    ModelDecode(#[from] serde_json::Error),
}

/// Errors that can occur when fetching a model through the upload client.
#[cfg(feature = "client")]
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read the upload payload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server rejected the workflow upload ({status}): {message}")]
    Api { status: u16, message: String },
}
