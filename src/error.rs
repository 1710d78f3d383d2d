use thiserror::Error;

/// Why a submission ended in the error region.
///
/// The `Display` output is exactly the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Error: {0}")]
    Network(String),
    #[error("{0}")]
    Service(String),
    #[error("Error: Unexpected response from parsing service: {0}")]
    MalformedResponse(String),
    #[error("Error: {0}")]
    Render(String),
    #[error("Error: A statement is already being parsed. Please wait for it to finish.")]
    Busy,
}

#[derive(Error, Debug)]
#[error("Failed to render template: {0}")]
pub struct RenderError(#[from] pub askama::Error);

impl From<RenderError> for UploadError {
    fn from(e: RenderError) -> Self {
        UploadError::Render(e.0.to_string())
    }
}
