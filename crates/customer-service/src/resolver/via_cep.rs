//! # ViaCEP Client
//!
//! `GET {base_url}/{cep}/json/` against <https://viacep.com.br>. A known code answers 200
//! with the address; an unknown one answers 200 with `{"erro": true}`; a malformed one
//! answers 400.
use crate::model::{Address, PostalCode};
use crate::resolver::{PostalResolver, ResolutionError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client for the ViaCEP postal code service.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http_client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    fn lookup_url(&self, postal_code: &PostalCode) -> String {
        format!(
            "{}/{}/json/",
            self.base_url.trim_end_matches('/'),
            postal_code.as_str()
        )
    }
}

#[async_trait]
impl PostalResolver for ViaCepClient {
    #[instrument(skip(self, postal_code), fields(%postal_code))]
    async fn resolve(&self, postal_code: &PostalCode) -> Result<Address, ResolutionError> {
        let url = self.lookup_url(postal_code);
        debug!(%url, "Querying ViaCEP");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolutionError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::BAD_REQUEST => {
                warn!("ViaCEP rejected postal code");
                return Err(ResolutionError::Rejected(postal_code.clone()));
            }
            status => {
                warn!(%status, "Unexpected ViaCEP status");
                return Err(ResolutionError::Unavailable(format!(
                    "unexpected status {status}"
                )));
            }
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| ResolutionError::MalformedResponse(e.to_string()))?;

        match body {
            ViaCepResponse::Missing { .. } => Err(ResolutionError::NotFound(postal_code.clone())),
            ViaCepResponse::Found(raw) => Ok(raw.into_address(postal_code.clone())),
        }
    }
}

/// The two shapes of a 200 answer. `erro` has been sent both as `true` and `"true"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ViaCepResponse {
    Missing {
        #[allow(dead_code)]
        erro: serde_json::Value,
    },
    Found(ViaCepAddress),
}

#[derive(Deserialize)]
struct ViaCepAddress {
    #[allow(dead_code)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    ibge: String,
    #[serde(default)]
    gia: String,
    #[serde(default)]
    ddd: String,
    #[serde(default)]
    siafi: String,
}

impl ViaCepAddress {
    // ViaCEP echoes the code hyphenated; the store key stays the normalised one we asked for.
    fn into_address(self, postal_code: PostalCode) -> Address {
        Address {
            postal_code,
            street: self.logradouro,
            complement: self.complemento,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
            ibge: self.ibge,
            gia: self.gia,
            ddd: self.ddd,
            siafi: self.siafi,
        }
    }
}
