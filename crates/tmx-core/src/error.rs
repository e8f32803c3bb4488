//! Error types and result alias for TMX document decoding.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for TMX document decoding.
///
/// Every variant is terminal for the enclosing parse: there is no partial or
/// degraded document, the first failure aborts the whole pass and carries
/// enough context (attribute or element name plus the offending raw text) to
/// locate the fault in the source document.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A required attribute is absent from its element.
    #[error("missing attribute '{name}'")]
    #[diagnostic(code(tmx::missing_attribute))]
    MissingAttribute { name: String },

    /// An attribute is present but its text fails to parse or violates the
    /// invariant of the target wrapper type.
    #[error("invalid attribute '{name}': \"{value}\"")]
    #[diagnostic(code(tmx::invalid_attribute))]
    InvalidAttribute { name: String, value: String },

    /// An unexpected element, or a required element that is absent.
    #[error("invalid element <{tag}>")]
    #[diagnostic(code(tmx::invalid_element))]
    InvalidElement { tag: String },

    /// A tile-layer `<data>` payload could not be decoded.
    #[error("malformed layer data: {0}")]
    #[diagnostic(code(tmx::malformed_payload))]
    MalformedPayload(String),

    /// The declared encoding/compression combination is not supported.
    #[error("unsupported data format: encoding \"{encoding}\", compression \"{compression}\"")]
    #[diagnostic(code(tmx::unsupported_data_format))]
    UnsupportedDataFormat { encoding: String, compression: String },

    /// A numeric or boolean literal not tied to a named attribute failed to
    /// parse, e.g. a CSV token or a boolean property value.
    #[error("text conversion failed: {0}")]
    #[diagnostic(code(tmx::text_conversion))]
    TextConversion(String),

    /// A constrained wrapper was constructed from an out-of-range value.
    #[error("invariant violation: {0}")]
    #[diagnostic(code(tmx::invariant_violation))]
    InvariantViolation(String),

    /// An unflipped tile identifier does not fit the 29-bit identifier width.
    #[error("tile identifier {0} does not fit the 29-bit identifier width")]
    #[diagnostic(code(tmx::identifier_overflow))]
    IdentifierOverflow(u32),

    /// An external tile-set reference chain exceeded the documented depth
    /// bound, which usually means the references are cyclic.
    #[error("external tile-set chain too deep while resolving \"{source_path}\"")]
    #[diagnostic(code(tmx::external_depth_exceeded))]
    ExternalDepthExceeded { source_path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    #[diagnostic(code(tmx::xml))]
    Xml(String),
}

/// Result type alias using the TMX [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
