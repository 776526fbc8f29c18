use thiserror::Error;

/// Errors that can occur when parsing identifiers or resolving patterns.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CadastroError {
    /// The input is not a checksum-valid CPF.
    #[error("invalid CPF '{0}'")]
    InvalidCpf(String),

    /// The input is not a checksum-valid CNPJ.
    #[error("invalid CNPJ '{0}'")]
    InvalidCnpj(String),

    /// A wildcard pattern did not clean down to exactly 11 characters.
    #[error("pattern must have 11 characters (digits or '*') after cleaning, got {found}")]
    InvalidPatternLength {
        /// Length of the pattern after stripping formatting characters.
        found: usize,
    },
}
