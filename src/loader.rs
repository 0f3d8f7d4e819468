use std::path::PathBuf;

use anyhow::Context as _;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use url::Url;

use crate::error::LoadError;
use crate::lesson::LessonRecord;

pub const DEFAULT_CATALOG: &str = "library.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// `http://` and `https://` URLs are fetched; anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CatalogSource::Remote(url),
            _ => CatalogSource::Local(PathBuf::from(raw)),
        }
    }

    pub fn location(&self) -> String {
        match self {
            CatalogSource::Remote(url) => url.to_string(),
            CatalogSource::Local(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[derive(Clone)]
pub struct CatalogLoader {
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }

    /// Single attempt, no timeout, no retry.
    pub async fn load(&self, source: &CatalogSource) -> Result<Vec<LessonRecord>, LoadError> {
        let location = source.location();
        let body = match source {
            CatalogSource::Remote(url) => self.get_bytes(url).await?,
            CatalogSource::Local(path) => {
                std::fs::read(path).map_err(|err| LoadError::MissingCatalog {
                    location: location.clone(),
                    reason: err.to_string(),
                })?
            }
        };

        let items: Vec<LessonRecord> = serde_json::from_slice(&body)
            .map_err(|source| LoadError::MalformedCatalog {
                location: location.clone(),
                source,
            })?;
        tracing::info!(%location, count = items.len(), "loaded catalog");
        Ok(items)
    }

    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        let missing = |reason: String| LoadError::MissingCatalog {
            location: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| missing(format!("GET failed: {err}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(missing(format!("status {status}")));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|err| missing(format!("read response body: {err}")))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sources() {
        assert_eq!(
            CatalogSource::parse("library.json"),
            CatalogSource::Local(PathBuf::from("library.json"))
        );
        assert_eq!(
            CatalogSource::parse("https://example.com/library.json"),
            CatalogSource::Remote(Url::parse("https://example.com/library.json").unwrap())
        );
        assert!(matches!(
            CatalogSource::parse("file:///tmp/x.json"),
            CatalogSource::Local(_)
        ));
    }

    #[tokio::test]
    async fn local_missing_and_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = CatalogLoader::new("test-agent").unwrap();

        let missing = CatalogSource::Local(tmp.path().join("library.json"));
        assert!(matches!(
            loader.load(&missing).await,
            Err(LoadError::MissingCatalog { .. })
        ));

        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"lessons": []}"#).unwrap();
        assert!(matches!(
            loader.load(&CatalogSource::Local(path)).await,
            Err(LoadError::MalformedCatalog { .. })
        ));
    }
}
