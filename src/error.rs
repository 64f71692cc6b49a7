use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The FQCN has fewer than two `\`-separated segments.
    #[error(
        "\"{fqcn}\" is not a valid FQCN with at least two segments. Expected format like \"Vendor\\Component\\Class\"."
    )]
    InvalidFqcn { fqcn: String },

    #[error("entity not found for key: {key}")]
    EntityNotFound { key: String },

    #[error("input not found for key: {key}")]
    InputNotFound { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
