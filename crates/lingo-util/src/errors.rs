use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all lingo operations.
#[derive(Debug, Error, Diagnostic)]
pub enum LingoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A version constraint clause that does not fit the accepted grammar.
    #[error("Invalid constraint clause: {clause}")]
    #[diagnostic(help(
        "Clauses are comma-separated and look like '>=1.0' or '==2.1.3'; accepted operators are >, >=, <, <=, ==, ="
    ))]
    Constraint { clause: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your ~/.lingo/config.toml for syntax errors"))]
    Config { message: String },

    /// A package's meta.json could not be read, parsed, or rendered.
    #[error("Meta error: {message}")]
    Meta { message: String },

    /// An affix pattern list failed to compile into a regular expression.
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// No installed package satisfies the request.
    #[error("{message}")]
    #[diagnostic(help("Run `lingo list` to see the packages in the data directory"))]
    NotFound { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LingoResult<T> = miette::Result<T>;
