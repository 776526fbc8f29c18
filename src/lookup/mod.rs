//! Public registration-record lookup via BrasilAPI, with throttling.
//!
//! Takes already-validated [`Cpf`](crate::core::Cpf) /
//! [`Cnpj`](crate::core::Cnpj) values and fetches the public registry
//! record for them. The limiter is a separate collaborator — callers
//! decide how to wait when it denies a slot.
//!
//! # Example
//!
//! ```ignore
//! use cadastro::core::Cnpj;
//! use cadastro::lookup::*;
//!
//! let cnpj = Cnpj::parse("11.444.777/0001-61")?;
//! let mut limiter = FixedWindowLimiter::per_minute(3);
//!
//! if limiter.try_acquire().is_ok() {
//!     let record = lookup_cnpj(&cnpj).await?;
//!     println!("{}", record.razao_social.unwrap_or_default());
//! }
//! ```

mod brasil_api;
mod throttle;

pub use brasil_api::{CnpjRecord, CpfRecord, LookupError, lookup_cnpj, lookup_cpf};
pub use throttle::{Clock, FixedWindowLimiter, SystemClock};
