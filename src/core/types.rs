use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::checksum::{IdKind, clean_digits, digits_valid};
use super::error::CadastroError;

/// A checksum-valid CPF (11-digit individual taxpayer number).
///
/// Construction goes through [`Cpf::parse`], so a value of this type is
/// always valid. `Display` renders the canonical masked form
/// (`111.444.777-35`); [`Cpf::as_digits`] gives the bare digit string.
/// Serialization uses the bare digit string, and deserialization routes
/// back through [`Cpf::parse`] so invalid data is rejected at the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf([u8; 11]);

impl Cpf {
    /// Parse and validate a CPF from a string, masked or bare.
    pub fn parse(raw: &str) -> Result<Self, CadastroError> {
        let digits = clean_digits(raw);
        if !digits_valid(&digits, IdKind::Cpf) {
            return Err(CadastroError::InvalidCpf(raw.trim().to_string()));
        }
        let mut arr = [0u8; 11];
        arr.copy_from_slice(&digits);
        Ok(Self(arr))
    }

    /// Caller guarantees the digits already passed checksum validation.
    pub(crate) fn from_digits_unchecked(digits: [u8; 11]) -> Self {
        Self(digits)
    }

    /// The bare 11-digit form without separators.
    pub fn as_digits(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.as_digits();
        write!(f, "{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}

impl FromStr for Cpf {
    type Err = CadastroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_digits())
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A checksum-valid CNPJ (14-digit legal-entity taxpayer number).
///
/// `Display` renders the canonical masked form (`11.444.777/0001-61`);
/// serde uses the bare digit string, validating on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cnpj([u8; 14]);

impl Cnpj {
    /// Parse and validate a CNPJ from a string, masked or bare.
    pub fn parse(raw: &str) -> Result<Self, CadastroError> {
        let digits = clean_digits(raw);
        if !digits_valid(&digits, IdKind::Cnpj) {
            return Err(CadastroError::InvalidCnpj(raw.trim().to_string()));
        }
        let mut arr = [0u8; 14];
        arr.copy_from_slice(&digits);
        Ok(Self(arr))
    }

    /// The bare 14-digit form without separators.
    pub fn as_digits(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.as_digits();
        write!(
            f,
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl FromStr for Cnpj {
    type Err = CadastroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cnpj {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_digits())
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
