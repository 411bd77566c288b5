use crate::error::{Error, Result};
use std::{fs, path::Path};

/// Where the core profile API description is published.
pub const DESCRIPTION_URL: &str = "https://www.khronos.org/registry/OpenGL/api/GL/glcorearb.h";

/// Retrieves a remote resource in full.
pub trait Download {
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain blocking HTTP GET, no retries. Waits for as long as the server takes.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Download for HttpDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched {
    Reused,
    Downloaded { bytes: usize },
}

/// Makes sure `path` exists, downloading `url` into it when it doesn't.
pub fn fetch(path: &Path, url: &str, downloader: &dyn Download) -> Result<Fetched> {
    if path.exists() {
        log::info!("Reusing {}", path.display());
        return Ok(Fetched::Reused);
    }

    log::info!("Downloading {} to {}", url, path.display());
    let body = downloader.download(url)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::write(path, &body).map_err(Error::io(path))?;

    Ok(Fetched::Downloaded { bytes: body.len() })
}
