use thiserror::Error;

/// Errors produced when parsing textual configuration values.
///
/// Event handlers never return these. Values read from element attributes
/// that fail to parse are logged and replaced by their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unknown navigation layout (expected `horizontal`, `vertical` or `both`).
    #[error("invalid navigation layout '{0}'")]
    InvalidLayout(String),

    /// Unknown text direction (expected `ltr` or `rtl`).
    #[error("invalid text direction '{0}'")]
    InvalidDirection(String),

    /// Unknown column layout (expected `fixed` or `flex`).
    #[error("invalid column layout '{0}'")]
    InvalidColumnLayout(String),

    /// Column width that is not a non-negative pixel count.
    #[error("invalid column width '{0}'")]
    InvalidColumnWidth(String),

    /// Unknown expand axis (expected `cross` or `main`).
    #[error("invalid expand axis '{0}'")]
    InvalidAxis(String),
}

pub type Result<T> = std::result::Result<T, Error>;
