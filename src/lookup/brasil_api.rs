//! BrasilAPI REST client for CPF/CNPJ registration records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Cnpj, Cpf};

const BRASIL_API_URL: &str = "https://brasilapi.com.br/api";

/// Public CNPJ registration record as published by BrasilAPI.
///
/// Every field is optional: the registry omits fields freely depending on
/// the entity's status, and unknown response fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CnpjRecord {
    /// Bare 14-digit CNPJ echoed by the registry.
    pub cnpj: Option<String>,
    /// Legal name (razão social).
    pub razao_social: Option<String>,
    /// Trade name (nome fantasia).
    pub nome_fantasia: Option<String>,
    /// Registration status, e.g. "ATIVA".
    pub descricao_situacao_cadastral: Option<String>,
    /// Date the entity began activity (YYYY-MM-DD).
    pub data_inicio_atividade: Option<String>,
    /// Primary economic activity description (CNAE fiscal).
    pub cnae_fiscal_descricao: Option<String>,
    /// Legal nature, e.g. "Sociedade Empresária Limitada".
    pub natureza_juridica: Option<String>,
    /// Street address.
    pub logradouro: Option<String>,
    /// Street number.
    pub numero: Option<String>,
    /// Neighborhood.
    pub bairro: Option<String>,
    /// Postal code (CEP).
    pub cep: Option<String>,
    /// City.
    pub municipio: Option<String>,
    /// State code (UF).
    pub uf: Option<String>,
    /// Primary phone with area code.
    pub ddd_telefone_1: Option<String>,
}

/// Public CPF registration record.
///
/// Detailed CPF data is mostly unavailable through public APIs (LGPD);
/// the record mirrors the fields the endpoint documents, all optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpfRecord {
    /// Bare 11-digit CPF echoed by the registry.
    pub cpf: Option<String>,
    /// Registered name.
    pub nome: Option<String>,
    /// Registration status.
    pub situacao_cadastral: Option<String>,
    /// Date of birth (YYYY-MM-DD).
    pub data_nascimento: Option<String>,
}

/// Error from a registry lookup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum LookupError {
    /// Network or HTTP transport error.
    Network(String),
    /// The identifier has no record in the registry (HTTP 404).
    NotFound(String),
    /// The API returned a non-success status.
    Api(String),
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "lookup network error: {e}"),
            Self::NotFound(id) => write!(f, "{id} not found in the registry"),
            Self::Api(e) => write!(f, "lookup API error: {e}"),
            Self::Parse(e) => write!(f, "lookup parse error: {e}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Fetch the public registration record for a CNPJ.
///
/// This function is async and requires network access. BrasilAPI is a
/// free public service with no authentication; pair calls with a
/// [`FixedWindowLimiter`](super::FixedWindowLimiter) to stay inside its
/// tolerated request rate.
///
/// # Errors
///
/// Returns `LookupError::NotFound` when the registry has no record for
/// the identifier, `LookupError::Network` on connection issues,
/// `LookupError::Api` for other non-success statuses, and
/// `LookupError::Parse` on unexpected response formats.
pub async fn lookup_cnpj(cnpj: &Cnpj) -> Result<CnpjRecord, LookupError> {
    let url = format!("{BRASIL_API_URL}/cnpj/v1/{}", cnpj.as_digits());
    fetch(&url, &cnpj.to_string()).await
}

/// Fetch the public registration record for a CPF.
///
/// Same contract as [`lookup_cnpj`]. Note that the individual endpoint
/// exposes far less data than the entity one.
pub async fn lookup_cpf(cpf: &Cpf) -> Result<CpfRecord, LookupError> {
    let url = format!("{BRASIL_API_URL}/cpf/v1/{}", cpf.as_digits());
    fetch(&url, &cpf.to_string()).await
}

async fn fetch<T>(url: &str, id: &str) -> Result<T, LookupError>
where
    T: serde::de::DeserializeOwned,
{
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound(id.to_string()));
    }
    if !status.is_success() {
        return Err(LookupError::Api(format!("HTTP {status}: {body}")));
    }

    serde_json::from_str(&body).map_err(|e: serde_json::Error| LookupError::Parse(e.to_string()))
}
