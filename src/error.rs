//! Error types for WXR decoding.

use thiserror::Error;

/// Main error type for the decoder library.
///
/// All failures are terminal for the decode attempt; the first error
/// encountered during the forward pass is the one reported.
#[derive(Debug, Error)]
pub enum WxrError {
    /// The root element or a required element is missing or misnamed.
    #[error("missing required element <{element}> in {context}")]
    StructuralMismatch { element: String, context: String },

    /// A leaf text value did not satisfy its scalar decoder's grammar.
    #[error("malformed value for <{field}>: '{value}': {message}")]
    MalformedScalar {
        field: String,
        value: String,
        message: String,
    },

    /// The document ended while elements were still open, or the
    /// underlying read failed.
    #[error("truncated input: {0}")]
    TruncatedInput(String),

    /// Any other XML parsing failure.
    #[error("XML parsing failed: {0}")]
    Xml(roxmltree::Error),
}

impl From<roxmltree::Error> for WxrError {
    fn from(err: roxmltree::Error) -> Self {
        match err {
            roxmltree::Error::UnclosedRootNode => {
                Self::TruncatedInput("document ended with unclosed elements".to_string())
            }
            roxmltree::Error::NoRootNode => Self::StructuralMismatch {
                element: "rss".to_string(),
                context: "empty document".to_string(),
            },
            other => Self::Xml(other),
        }
    }
}

impl From<std::io::Error> for WxrError {
    fn from(err: std::io::Error) -> Self {
        Self::TruncatedInput(err.to_string())
    }
}

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, WxrError>;
