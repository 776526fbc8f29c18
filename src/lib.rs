//! # cadastro
//!
//! Brazilian taxpayer identifier validation and lookup: CPF (individuals,
//! 11 digits) and CNPJ (legal entities, 14 digits), with wildcard search
//! over partially-known CPFs and public-record lookup via
//! [BrasilAPI](https://brasilapi.com.br).
//!
//! Both identifier classes carry two trailing check digits computed by a
//! weighted mod-11 scheme; `validate` verifies them, and the wildcard
//! resolver enumerates every checksum-valid completion of a masked CPF.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! // Checksum validation, with or without the display mask
//! assert!(validate("111.444.777-35", IdKind::Cpf));
//! assert!(validate("11.444.777/0001-61", IdKind::Cnpj));
//! assert!(!validate("111.444.777-36", IdKind::Cpf));
//!
//! // Reconstruct a CPF with unknown digits
//! let found = resolve("111.444.777-**").unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].to_string(), "111.444.777-35");
//! assert_eq!(found[0].as_digits(), "11144477735");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ checksum validation, typed identifiers, wildcard search |
//! | `lookup` | BrasilAPI registration-record lookup, request throttling |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "lookup")]
pub mod lookup;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
