//! Asset fetching for embedded images.
//!
//! Remote `http(s)` URLs are downloaded, `data:` URIs decoded in place and
//! anything else is read as a local file path. No retry: a failed fetch is
//! final for that asset.

use crate::element::{ImageFormat, ImageSource};
use crate::error::ExportError;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::time::Duration;

/// Source of raw asset bytes.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError>;
}

/// Fetch an asset and identify it as an image.
pub async fn fetch_image(
    fetcher: &dyn AssetFetcher,
    url: &str,
) -> Result<ImageSource, ExportError> {
    if url.trim().is_empty() {
        return Err(ExportError::fetch(url, "empty URL"));
    }
    let data = fetcher.fetch(url).await?;
    let format = ImageFormat::sniff(&data)
        .ok_or_else(|| ExportError::fetch(url, "unrecognised image data"))?;
    Ok(ImageSource { data, format })
}

/// Default fetcher: HTTP via `reqwest`, files via `tokio::fs`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ExportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ExportError::fetch("", format!("HTTP client setup failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        if url.starts_with("data:") {
            return decode_data_uri(url);
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            log::debug!("downloading {url}");
            let response = self
                .client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| ExportError::fetch(url, e))?;
            let bytes = response
                .bytes()
                .await
                .map_err(|e| ExportError::fetch(url, e))?;
            return Ok(bytes.to_vec());
        }
        let path = url.strip_prefix("file://").unwrap_or(url);
        tokio::fs::read(path)
            .await
            .map_err(|e| ExportError::fetch(url, e))
    }
}

/// Decode `data:[<mime>][;base64],<payload>`.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ExportError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::fetch(uri, "not a data URI"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::fetch(uri, "missing ',' in data URI"))?;
    if meta.ends_with(";base64") {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| ExportError::fetch(uri, e))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_base64() {
        let bytes = decode_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn data_uri_plain() {
        let bytes = decode_data_uri("data:image/svg+xml,<svg/>").unwrap();
        assert_eq!(bytes, b"<svg/>");
    }

    #[test]
    fn data_uri_errors() {
        assert!(decode_data_uri("data:image/png;base64").is_err());
        assert!(decode_data_uri("data:;base64,***").is_err());
        assert!(decode_data_uri("http://x").is_err());
    }

    #[tokio::test]
    async fn local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.gif");
        std::fs::write(&path, b"GIF89a....").unwrap();

        let fetcher = HttpFetcher::new(None).unwrap();
        let image = fetch_image(&fetcher, path.to_str().unwrap()).await.unwrap();
        assert_eq!(image.format, ImageFormat::Gif);

        let missing = fetch_image(&fetcher, "/definitely/not/here.png").await;
        assert!(matches!(missing, Err(ExportError::Fetch { .. })));
    }
}
