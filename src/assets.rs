//! Asset resolution for images and picture fills.
//!
//! The core engine never talks to the network or the filesystem directly;
//! it goes through [`AssetResolver`] so callers can swap transports (or
//! stub them out in tests). The default resolver reads local paths relative
//! to a base directory and fetches `http(s)` URLs with a blocking request
//! and a fixed timeout; the render pass is short-lived and sequential, so
//! there is no retry and no cancellation.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// How long a remote fetch may take before the shape falls back to a
/// placeholder.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Fetches asset bytes for a location that is either a URL or a local path.
pub trait AssetResolver {
    fn fetch(&self, location: &str, base_dir: &Path) -> Result<Vec<u8>, AssetError>;
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// The production resolver: filesystem for paths, blocking HTTP for URLs.
#[derive(Debug, Default)]
pub struct DefaultAssetResolver;

impl AssetResolver for DefaultAssetResolver {
    fn fetch(&self, location: &str, base_dir: &Path) -> Result<Vec<u8>, AssetError> {
        if is_url(location) {
            let client = reqwest::blocking::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .map_err(|e| AssetError::Fetch {
                    url: location.to_string(),
                    reason: e.to_string(),
                })?;
            let response = client.get(location).send().map_err(|e| AssetError::Fetch {
                url: location.to_string(),
                reason: e.to_string(),
            })?;
            if !response.status().is_success() {
                return Err(AssetError::Fetch {
                    url: location.to_string(),
                    reason: format!("status {}", response.status()),
                });
            }
            let bytes = response.bytes().map_err(|e| AssetError::Fetch {
                url: location.to_string(),
                reason: e.to_string(),
            })?;
            Ok(bytes.to_vec())
        } else {
            let path = if Path::new(location).is_absolute() {
                Path::new(location).to_path_buf()
            } else {
                base_dir.join(location)
            };
            if !path.exists() {
                return Err(AssetError::NotFound(path.display().to_string()));
            }
            std::fs::read(&path).map_err(|source| AssetError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

/// Resolves a location the way [`DefaultAssetResolver`] would, without
/// reading it: URLs pass through, relative paths join the base directory.
pub fn resolve_location(location: &str, base_dir: &Path) -> String {
    if is_url(location) || Path::new(location).is_absolute() {
        location.to_string()
    } else {
        base_dir.join(location).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let resolver = DefaultAssetResolver;
        let err = resolver
            .fetch("no/such/file.png", Path::new("/tmp"))
            .unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn relative_locations_join_base_dir() {
        assert_eq!(
            resolve_location("img/a.png", Path::new("/assets")),
            "/assets/img/a.png"
        );
        assert_eq!(
            resolve_location("https://example.com/a.png", Path::new("/assets")),
            "https://example.com/a.png"
        );
    }
}
