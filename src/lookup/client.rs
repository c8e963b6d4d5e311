//! HTTP client for the ViaCEP zipcode directory
//!
//! `GET {base_url}/ws/{digits}/json` answers with the address fields, or
//! with an `erro` marker when the zipcode is unknown.

use super::{LookupError, LookupLocation, ZipcodeLookup};
use crate::state::ZIPCODE_DIGITS;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default lookup service
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Strip everything but digits.
///
/// Returns `None` when fewer than eight digits remain; callers treat that
/// as "nothing to look up yet", not as an error.
pub fn normalize_zipcode(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < ZIPCODE_DIGITS {
        return None;
    }
    Some(digits)
}

/// Body returned by ViaCEP for a known zipcode
#[derive(Debug, Deserialize)]
struct ViaCepAddress {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl From<ViaCepAddress> for LookupLocation {
    fn from(body: ViaCepAddress) -> Self {
        Self {
            street: body.logradouro,
            neighborhood: body.bairro,
            city: body.localidade,
            state_code: body.uf,
        }
    }
}

/// Client for the ViaCEP service
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new client.
    ///
    /// Without a timeout the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, digits: &str) -> String {
        format!("{}/ws/{}/json", self.base_url, digits)
    }
}

#[async_trait]
impl ZipcodeLookup for ViaCepClient {
    async fn lookup(&self, digits: &str) -> Result<LookupLocation, LookupError> {
        let url = self.url_for(digits);
        tracing::debug!(%url, "looking up zipcode");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Failed(format!("unexpected status {status}")));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::Failed(e.to_string()))?;

        let object = body
            .as_object()
            .ok_or_else(|| LookupError::Failed("response is not a JSON object".to_string()))?;
        if object.contains_key("erro") {
            return Err(LookupError::NotFound);
        }

        serde_json::from_value::<ViaCepAddress>(body)
            .map(LookupLocation::from)
            .map_err(|e| LookupError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ViaCepClient {
        ViaCepClient::new(server.uri(), Some(Duration::from_secs(5))).unwrap()
    }

    mod normalize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_strips_mask() {
            assert_eq!(normalize_zipcode("09405-400").as_deref(), Some("09405400"));
        }

        #[test]
        fn test_strips_any_non_digit() {
            assert_eq!(normalize_zipcode(" 094.05 40-0 ").as_deref(), Some("09405400"));
        }

        #[test]
        fn test_short_input_is_noop() {
            assert_eq!(normalize_zipcode(""), None);
            assert_eq!(normalize_zipcode("09405-40"), None);
            assert_eq!(normalize_zipcode("abcdefgh"), None);
        }

        #[test]
        fn test_long_input_is_passed_through() {
            assert_eq!(normalize_zipcode("094054001").as_deref(), Some("094054001"));
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ViaCepClient::new("https://viacep.com.br/", None).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            client.url_for("09405400"),
            "https://viacep.com.br/ws/09405400/json"
        );
    }

    #[tokio::test]
    async fn test_lookup_returns_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/09405400/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cep": "09405-400",
                "logradouro": "Rua Zumbi",
                "complemento": "",
                "bairro": "Colônia",
                "localidade": "Ribeirão Pires",
                "uf": "SP",
                "ibge": "3543303"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let location = test_client(&server).lookup("09405400").await.unwrap();

        assert_eq!(
            location,
            LookupLocation {
                street: "Rua Zumbi".to_string(),
                neighborhood: "Colônia".to_string(),
                city: "Ribeirão Pires".to_string(),
                state_code: "SP".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_lookup_missing_fields_default_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/69945000/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "localidade": "Acrelândia",
                "uf": "AC"
            })))
            .mount(&server)
            .await;

        let location = test_client(&server).lookup("69945000").await.unwrap();

        assert_eq!(location.street, "");
        assert_eq!(location.neighborhood, "");
        assert_eq!(location.city, "Acrelândia");
        assert_eq!(location.state_code, "AC");
    }

    #[tokio::test]
    async fn test_lookup_error_marker_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/99999999/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": true })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("99999999").await;
        tokio_test::assert_err!(&result);
        assert_eq!(result, Err(LookupError::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_string_error_marker_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/99999999/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": "true" })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("99999999").await;
        assert_eq!(result, Err(LookupError::NotFound));
    }

    #[tokio::test]
    async fn test_lookup_bad_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/094054001/json"))
            .respond_with(ResponseTemplate::new(400).set_body_string("<h1>Bad Request</h1>"))
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("094054001").await;
        assert!(matches!(result, Err(LookupError::Failed(_))));
    }

    #[tokio::test]
    async fn test_lookup_malformed_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/09405400/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("09405400").await;
        assert!(matches!(result, Err(LookupError::Failed(_))));
    }

    #[tokio::test]
    async fn test_lookup_non_object_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/09405400/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("09405400").await;
        assert!(matches!(result, Err(LookupError::Failed(_))));
    }

    #[tokio::test]
    async fn test_lookup_wrong_field_type_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/09405400/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "uf": 35 })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).lookup("09405400").await;
        assert!(matches!(result, Err(LookupError::Failed(_))));
    }

    #[tokio::test]
    async fn test_lookup_connection_refused_is_failure() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = ViaCepClient::new(uri, Some(Duration::from_secs(2))).unwrap();
        let result = client.lookup("09405400").await;
        assert!(matches!(result, Err(LookupError::Failed(_))));
    }
}
