use thiserror::Error;

/// Failure to turn a color reference into a concrete color.
///
/// None of these are transient: resolution does no I/O, so retrying with the same inputs always
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A scheme token is unknown, is `phClr` in a context that needs a palette slot, or the
    /// active color map has no entry for it.
    #[error("unknown color slot: {0}")]
    UnknownSlot(String),
    #[error("unknown preset color: {0}")]
    UnknownPreset(String),
    #[error("placeholder color (phClr) requires a color supplied by the surrounding style")]
    PlaceholderRequiresContext,
    /// A literal color value is structurally invalid (for example a bad `srgbClr` hex string).
    #[error("malformed color reference: {0}")]
    MalformedReference(String),
}
