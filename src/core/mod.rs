//! Core CPF/CNPJ checksum validation, typed identifiers, and wildcard search.
//!
//! Everything here is pure computation: no I/O, no shared state, safe to
//! call concurrently from any number of threads.

mod checksum;
mod error;
mod resolve;
mod types;

pub use checksum::{IdKind, is_valid_cnpj, is_valid_cpf, validate};
pub use error::CadastroError;
pub use resolve::{Candidates, resolve};
pub use types::{Cnpj, Cpf};
