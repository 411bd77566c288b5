mod emit;
mod error;
mod extract;
mod fetch;

pub use emit::{emit_file, render, EntryPoint};
pub use error::{Error, Result};
pub use extract::{extract, extract_file};
pub use fetch::{fetch, Download, Fetched, HttpDownloader, DESCRIPTION_URL};

use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

pub static RESOURCES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");

const DESCRIPTION_FILE: &str = "GL/glcorearb.h";
const HEADER_FILE: &str = "GL/gl3w.h";

#[derive(Debug)]
pub struct Summary {
    pub header: PathBuf,
    /// Entry points written, sorted.
    pub names: Vec<String>,
    pub reused: bool,
}

/// Runs fetch, extract and emit against files under `root`.
pub struct Generator {
    root: PathBuf,
    url: String,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            url: DESCRIPTION_URL.to_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description_path(&self) -> PathBuf {
        self.root.join(DESCRIPTION_FILE)
    }

    pub fn header_path(&self) -> PathBuf {
        self.root.join(HEADER_FILE)
    }

    pub fn run(&self, downloader: &dyn Download) -> Result<Summary> {
        let description = self.description_path();
        let fetched = fetch(&description, &self.url, downloader)?;

        let names = extract_file(&description)?;
        log::info!("Found {} entry points", names.len());

        let header = self.header_path();
        emit_file(&header, &names)?;

        Ok(Summary {
            header,
            names,
            reused: fetched == Fetched::Reused,
        })
    }
}

#[cfg(test)]
mod test_util {
    use std::{fs, path::PathBuf};

    /// Fresh directory under the system temp dir, unique per test and process.
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gl3w-gen-{}-{}", name, std::process::id()));
        // Missing on a first run, leftovers from an earlier one must go
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        assert!(
            fs::read_dir(&dir).unwrap().next().is_none(),
            "{} not empty",
            dir.display()
        );
        dir
    }
}
