//! `BreedCatalog` over the public Dog API (https://dog.ceo/dog-api/)

use async_trait::async_trait;
use kennel_core::{BreedCatalog, KennelError, Result};
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::client::Client;

pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Every Dog API response wraps its payload in `message`
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    message: T,
    #[serde(default)]
    status: Option<String>,
}

pub struct DogCeoCatalog {
    client: Client,
    base_url: String,
}

impl Default for DogCeoCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DogCeoCatalog {
    pub fn new(base_url: &str) -> Self {
        DogCeoCatalog {
            client: Client::default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `/breed/{main}[/{sub}]/images` for a breed identifier. Sub-breeds are
    /// spelled `main-sub` in image URIs and links.
    fn images_url(&self, breed: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(&format!("{}/", self.base_url))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("catalog URL cannot have a path"))?;
            segments.pop_if_empty().push("breed");
            for part in breed.split('-').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
            segments.push("images");
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let response: ApiResponse<T> = self.client.get(url).await?;
        match response.status.as_deref() {
            None | Some("success") => Ok(response.message),
            Some(other) => Err(anyhow::anyhow!("Dog API returned status {}", other)),
        }
    }
}

fn fetch_error(err: anyhow::Error) -> KennelError {
    KennelError::Fetch(format!("{:#}", err))
}

#[async_trait]
impl BreedCatalog for DogCeoCatalog {
    async fn list_breeds(&self) -> Result<Vec<String>> {
        let url = format!("{}/breeds/list/all", self.base_url);
        let breeds: BTreeMap<String, Vec<String>> = self.fetch(&url).await.map_err(fetch_error)?;
        Ok(breeds.into_keys().collect())
    }

    async fn list_images(&self, breed: &str, limit: usize) -> Result<Vec<String>> {
        let url = self.images_url(breed).map_err(fetch_error)?;
        let images: Vec<String> = self.fetch(url.as_str()).await.map_err(fetch_error)?;
        Ok(images.into_iter().take(limit).collect())
    }

    async fn random_image(&self) -> Result<String> {
        let url = format!("{}/breeds/image/random", self.base_url);
        self.fetch(&url).await.map_err(fetch_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_url() {
        let catalog = DogCeoCatalog::default();
        assert_eq!(
            catalog.images_url("beagle").unwrap().as_str(),
            "https://dog.ceo/api/breed/beagle/images"
        );
        assert_eq!(
            catalog.images_url("hound-afghan").unwrap().as_str(),
            "https://dog.ceo/api/breed/hound/afghan/images"
        );
    }

    #[test]
    fn test_images_url_escapes() {
        let catalog = DogCeoCatalog::new("http://localhost:9000/api/");
        assert_eq!(
            catalog.images_url("a b").unwrap().as_str(),
            "http://localhost:9000/api/breed/a%20b/images"
        );
    }

    #[test]
    fn test_response_envelope() {
        let parsed: ApiResponse<String> = serde_json::from_str(
            r#"{"message":"https://images.dog.ceo/breeds/pug/1.jpg","status":"success"}"#,
        )
        .unwrap();
        assert_eq!(parsed.message, "https://images.dog.ceo/breeds/pug/1.jpg");
    }
}
