//! Where the local dictionary bytes come from

use super::DictionaryError;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;

/// A fetchable dictionary resource
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Read the raw (still encoded) dictionary bytes
    async fn fetch(&self) -> Result<Vec<u8>, DictionaryError>;

    /// Human-readable location for log lines
    fn location(&self) -> String;
}

/// Dictionary file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, DictionaryError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| DictionaryError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, DictionaryError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Pick a source for a configured location: `http(s)://` URLs are fetched
/// with `client`, anything else is a file path.
#[must_use]
pub fn source_for_location(location: &str, client: &Client) -> Box<dyn DictionarySource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(client.clone(), location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn location_picks_source_kind() {
        let client = Client::new();
        assert_eq!(
            source_for_location("https://example.org/pl_PL.dic", &client).location(),
            "https://example.org/pl_PL.dic"
        );
        assert_eq!(
            source_for_location("dictionary/pl_PL.dic", &client).location(),
            "dictionary/pl_PL.dic"
        );
    }

    #[tokio::test]
    async fn file_source_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1\nwoda\n").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().await.unwrap(), b"1\nwoda\n");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.dic"));
        assert!(matches!(
            source.fetch().await,
            Err(DictionaryError::Io { .. })
        ));
    }
}
