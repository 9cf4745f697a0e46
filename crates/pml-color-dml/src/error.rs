use pml_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DmlError {
    #[error("xml error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("utf-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("missing required attribute: {0}")]
    MissingAttr(&'static str),
    #[error("missing required element: {0}")]
    MissingElement(&'static str),
    #[error("invalid value for {attr}: {value:?}")]
    InvalidValue { attr: &'static str, value: String },
    #[error("invalid DrawingML: {0}")]
    Invalid(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}
