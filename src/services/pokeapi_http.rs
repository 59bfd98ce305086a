//! Pokémon API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{ApiConfig, AppError, Catalogue, CatalogueItem, PokemonDetail};
use crate::ports::CatalogueSource;

/// Blocking HTTP client for the Pokémon API.
#[derive(Debug, Clone)]
pub struct HttpCatalogueSource {
    api_url: Url,
    list_limit: u32,
    list_offset: u32,
    client: Client,
}

impl HttpCatalogueSource {
    /// Create a new HTTP source from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            AppError::config_error(format!("Invalid API URL '{}': {}", config.api_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_url,
            list_limit: config.list_limit,
            list_offset: config.list_offset,
            client,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!(
                    "API URL '{}' cannot carry path segments",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<ListEntry>,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl CatalogueSource for HttpCatalogueSource {
    fn fetch_catalogue(&self) -> Result<Catalogue, AppError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.list_limit.to_string())
            .append_pair("offset", &self.list_offset.to_string());

        let response = self.client.get(url).send().map_err(|e| {
            AppError::fetch_failed(format!("HTTP request failed: {}", e), None)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch_failed(
                "Failed to load the Pokémon list",
                Some(status.as_u16()),
            ));
        }

        let list: ListResponse = response.json().map_err(|e| AppError::ParseError {
            what: "catalogue response".to_string(),
            details: e.to_string(),
        })?;

        Ok(Catalogue::new(
            list.results
                .into_iter()
                .map(|entry| CatalogueItem { name: entry.name, url: entry.url })
                .collect(),
        ))
    }

    fn fetch_detail(&self, name: &str) -> Result<PokemonDetail, AppError> {
        let url = self.endpoint(&["pokemon", name])?;

        let response = self.client.get(url).send().map_err(|e| {
            AppError::fetch_failed(format!("HTTP request failed: {}", e), None)
        })?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(AppError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::fetch_failed(
                format!("Failed to load details for '{}'", name),
                Some(status.as_u16()),
            ));
        }

        let detail: DetailResponse = response.json().map_err(|e| AppError::ParseError {
            what: "detail response".to_string(),
            details: e.to_string(),
        })?;

        Ok(PokemonDetail {
            id: detail.id,
            name: detail.name,
            height: detail.height,
            weight: detail.weight,
            sprite: detail.sprites.front_default,
            types: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
        })
    }
}
