// Remote catalog client - thin wrapper over the REST Countries v3.1 API
//
// One method per endpoint, all issuing a single HTTP GET and decoding a JSON
// array of Country. There is deliberately no retry, caching, or rate
// limiting: a failed call surfaces one error and the caller re-triggers.

use crate::model::Country;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;

/// Errors surfaced by the catalog client
///
/// The taxonomy is intentionally small: a single-code lookup that matches
/// nothing is `NotFound`; everything else collapses into a
/// "failed to fetch <what>" message carried by the variant.
#[derive(Debug)]
pub enum ApiError {
    /// Single-code lookup returned 404 or an empty array
    NotFound,
    /// Upstream answered with a non-2xx status
    Status {
        what: &'static str,
        status: StatusCode,
    },
    /// Transport failure or undecodable body
    Request {
        what: &'static str,
        source: reqwest::Error,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "country not found"),
            ApiError::Status { what, .. } | ApiError::Request { what, .. } => {
                write!(f, "failed to fetch {}", what)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Request { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// HTTP client for the REST Countries API
#[derive(Debug, Clone)]
pub struct CountryClient {
    client: reqwest::Client,
    base_url: String,
}

impl CountryClient {
    /// Build a client with connection pooling and a request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET the full catalog: `/all`
    pub async fn all(&self) -> Result<Vec<Country>, ApiError> {
        self.get_list("countries", format!("{}/all", self.base_url))
            .await
    }

    /// GET `/independent?status=`
    pub async fn independent(&self, status: bool) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "independent countries",
            format!("{}/independent?status={}", self.base_url, status),
        )
        .await
    }

    /// GET `/name/{q}` - partial name match
    pub async fn by_name(&self, name: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list("name", format!("{}/name/{}", self.base_url, name))
            .await
    }

    /// GET `/name/{q}?fullText=true` - exact name match
    pub async fn by_full_name(&self, name: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "name",
            format!("{}/name/{}?fullText=true", self.base_url, name),
        )
        .await
    }

    /// GET `/alpha/{code}` - single country by cca2/cca3 code
    ///
    /// The API wraps the record in a one-element array; an empty array and a
    /// 404 both mean the code matched nothing.
    pub async fn by_code(&self, code: &str) -> Result<Country, ApiError> {
        let url = format!("{}/alpha/{}", self.base_url, code);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                what: "alpha code",
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                what: "alpha code",
                status: response.status(),
            });
        }

        let mut countries: Vec<Country> =
            response.json().await.map_err(|source| ApiError::Request {
                what: "alpha code",
                source,
            })?;

        if countries.is_empty() {
            return Err(ApiError::NotFound);
        }
        Ok(countries.swap_remove(0))
    }

    /// GET `/alpha?codes={c1;c2;...}` - several countries by code
    pub async fn by_codes(&self, codes: &[String]) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "alpha code",
            format!("{}/alpha?codes={}", self.base_url, join_codes(codes)),
        )
        .await
    }

    /// GET `/currency/{code}`
    pub async fn by_currency(&self, code: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list("currency", format!("{}/currency/{}", self.base_url, code))
            .await
    }

    /// GET `/lang/{code}`
    pub async fn by_language(&self, code: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list("lang", format!("{}/lang/{}", self.base_url, code))
            .await
    }

    /// GET `/capital/{q}`
    pub async fn by_capital(&self, capital: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list("capital", format!("{}/capital/{}", self.base_url, capital))
            .await
    }

    /// GET `/callingcode/{code}`
    pub async fn by_calling_code(&self, code: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "calling code",
            format!("{}/callingcode/{}", self.base_url, code),
        )
        .await
    }

    /// GET `/region/{region}`
    pub async fn by_region(&self, region: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list("region", format!("{}/region/{}", self.base_url, region))
            .await
    }

    /// GET `/regionalbloc/{bloc}`
    pub async fn by_regional_bloc(&self, bloc: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "regional bloc",
            format!("{}/regionalbloc/{}", self.base_url, bloc),
        )
        .await
    }

    /// GET `/subregion/{region}`
    pub async fn by_subregion(&self, subregion: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "subregion",
            format!("{}/subregion/{}", self.base_url, subregion),
        )
        .await
    }

    /// GET `/translation/{q}`
    pub async fn by_translation(&self, translation: &str) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "translation",
            format!("{}/translation/{}", self.base_url, translation),
        )
        .await
    }

    /// GET `/all?fields={f1,f2,...}` - projected catalog fetch
    pub async fn all_fields(&self, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.get_list(
            "all data",
            format!("{}/all?fields={}", self.base_url, join_fields(fields)),
        )
        .await
    }

    /// Shared GET-and-decode path for every list endpoint
    async fn get_list(&self, what: &'static str, url: String) -> Result<Vec<Country>, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request { what, source })?;

        if !response.status().is_success() {
            tracing::warn!("GET {} -> {}", url, response.status());
            return Err(ApiError::Status {
                what,
                status: response.status(),
            });
        }

        response.json().await.map_err(|source| ApiError::Request { what, source })
    }
}

/// Codes are separated with ';' in the `/alpha?codes=` query
fn join_codes(codes: &[String]) -> String {
    codes.join(";")
}

/// Field projections are separated with ',' in the `?fields=` query
fn join_fields(fields: &[&str]) -> String {
    fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_joined_with_semicolons() {
        let codes = vec!["FIN".to_string(), "SWE".to_string(), "NOR".to_string()];
        assert_eq!(join_codes(&codes), "FIN;SWE;NOR");
        assert_eq!(join_codes(&[]), "");
    }

    #[test]
    fn fields_joined_with_commas() {
        assert_eq!(join_fields(&["name", "cca3", "flags"]), "name,cca3,flags");
    }

    #[test]
    fn error_messages_follow_taxonomy() {
        assert_eq!(ApiError::NotFound.to_string(), "country not found");
        let err = ApiError::Status {
            what: "region",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "failed to fetch region");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            CountryClient::new("https://restcountries.com/v3.1/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, "https://restcountries.com/v3.1");
    }
}
