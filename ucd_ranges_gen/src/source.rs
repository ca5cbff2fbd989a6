// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use ucd_ranges::{parse_properties, property_names, Error, PropertyTable, Result};

/// Where the Unicode Consortium publishes versioned UCD files.
pub const DEFAULT_BASE_URL: &str = "https://www.unicode.org/Public";

/// A UCD file and the column holding its property names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UcdFile {
    /// The path relative to the version directory, e.g. `ucd/Scripts.txt`.
    pub path: &'static str,
    /// The zero-based column holding the property name.
    pub name_col: usize,
}

/// Reads UCD files of one Unicode version, from a local copy when possible
/// and from upstream otherwise.
#[derive(Clone, Debug)]
pub struct UcdSource {
    version: String,
    data_root: Option<PathBuf>,
    base_url: String,
}

impl UcdSource {
    /// Creates a source that fetches everything from [`DEFAULT_BASE_URL`].
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            data_root: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Reads files from `<root>/<version>/` when they exist there.
    #[must_use]
    pub fn with_data_root(mut self, root: Option<PathBuf>) -> Self {
        self.data_root = root;
        self
    }

    /// Fetches missing files from `<base_url>/<version>/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The Unicode version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The local path of `path`, if a data root is configured.
    pub fn local_path(&self, path: &str) -> Option<PathBuf> {
        self.data_root
            .as_ref()
            .map(|root| root.join(&self.version).join(path))
    }

    /// The upstream URL of `path`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{path}",
            self.base_url.trim_end_matches('/'),
            self.version
        )
    }

    /// Opens `path` for reading.
    pub fn open(&self, path: &str) -> Result<Box<dyn BufRead>> {
        if let Some(local) = self.local_path(path) {
            match File::open(&local) {
                Ok(file) => {
                    log::info!("Using {}", local.display());
                    return Ok(Box::new(BufReader::new(file)));
                }
                Err(err) => log::warn!("Unable to open UCD file {}: {err}", local.display()),
            }
        }

        let url = self.url(path);
        log::info!("Fetching {url}");
        let response = reqwest::blocking::get(&url)
            .map_err(|err| Error::fetch(&url, "request failed", Some(Box::new(err))))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(
                url,
                format!("GET failed with status {status}. Is this a valid version?"),
                None,
            ));
        }
        Ok(Box::new(BufReader::new(response)))
    }

    /// Reads `file` into a property table.
    pub fn parse(&self, file: UcdFile) -> Result<PropertyTable> {
        let reader = self.open(file.path)?;
        parse_properties(reader, file.name_col).map_err(|err| err.with_source_name(file.path))
    }

    /// Lists the distinct names in the name column of `file`.
    pub fn names(&self, file: UcdFile) -> Result<Vec<String>> {
        let reader = self.open(file.path)?;
        property_names(reader, file.name_col).map_err(|err| err.with_source_name(file.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_upstream_urls() {
        let source = UcdSource::new("15.1.0");
        assert_eq!(
            source.url("ucd/Scripts.txt"),
            "https://www.unicode.org/Public/15.1.0/ucd/Scripts.txt"
        );
        let source = source.with_base_url("http://mirror.example/unicode/");
        assert_eq!(
            source.url("ucd/emoji/emoji-data.txt"),
            "http://mirror.example/unicode/15.1.0/ucd/emoji/emoji-data.txt"
        );
    }

    #[test]
    fn local_paths_include_the_version() {
        let source = UcdSource::new("15.1.0");
        assert_eq!(source.local_path("ucd/Scripts.txt"), None);
        let source = source.with_data_root(Some(PathBuf::from("/data/ucd")));
        assert_eq!(
            source.local_path("ucd/Scripts.txt"),
            Some(PathBuf::from("/data/ucd/15.1.0/ucd/Scripts.txt"))
        );
    }
}
