//! Card set catalog.
//!
//! The catalog maps set names to ordered image references. It is loaded once
//! at startup, installed process-wide and never mutated afterwards.

use crate::error::{AppError, Result};
use crate::file_utils;
use crate::image_loader::is_remote;
use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// A named, ordered collection of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    pub name: String,
    pub images: Vec<String>,
}

/// Ordered list of card sets, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sets: Vec<CardSet>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "set")]
    sets: Vec<SetEntry>,
}

#[derive(Deserialize)]
struct SetEntry {
    name: String,
    #[serde(default)]
    images: Vec<String>,
    directory: Option<PathBuf>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from sets; the first set with a given name wins.
    pub fn from_sets(sets: impl IntoIterator<Item = CardSet>) -> Self {
        let mut catalog = Self::empty();
        for set in sets {
            catalog.push(set);
        }
        catalog
    }

    fn push(&mut self, set: CardSet) {
        if self.sets.iter().any(|s| s.name == set.name) {
            warn!("Duplicate card set {:?} ignored", set.name);
            return;
        }
        self.sets.push(set);
    }

    /// Parses a TOML catalog. Relative paths resolve against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::empty();

        for entry in file.sets {
            let mut images: Vec<String> = entry
                .images
                .into_iter()
                .map(|reference| resolve_reference(reference, base_dir))
                .collect();

            if let Some(directory) = entry.directory {
                let directory = base_dir.join(directory);
                images.extend(
                    file_utils::scan_directory(&directory)?
                        .into_iter()
                        .map(|p| p.to_string_lossy().into_owned()),
                );
            }

            catalog.push(CardSet {
                name: entry.name,
                images,
            });
        }

        Ok(catalog)
    }

    /// Reads a TOML catalog file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::CatalogRead(format!("{}: {}", path.display(), e)))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, base_dir)
    }

    /// Builds one set per subdirectory of `dir` that holds at least one image.
    pub fn load_directory(dir: &Path) -> Result<Self> {
        let mut sets = Vec::new();

        for subdir in file_utils::scan_subdirectories(dir)? {
            let images = file_utils::scan_directory(&subdir)?;
            if images.is_empty() {
                continue;
            }
            let Some(name) = subdir.file_name() else {
                continue;
            };
            sets.push(CardSet {
                name: name.to_string_lossy().into_owned(),
                images: images
                    .into_iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect(),
            });
        }

        Ok(Self::from_sets(sets))
    }

    /// Loads a catalog from either a TOML file or a directory of set folders.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = if path.is_dir() {
            Self::load_directory(path)?
        } else {
            Self::load_file(path)?
        };
        info!(
            "Loaded {} card set(s) from {}",
            catalog.sets.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Set names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.sets.iter().map(|s| s.name.clone()).collect()
    }

    /// Name of the set selected at startup.
    pub fn first_set_name(&self) -> Option<&str> {
        self.sets.first().map(|s| s.name.as_str())
    }

    /// Image references of the named set, if it exists.
    pub fn images(&self, name: &str) -> Option<&[String]> {
        self.sets
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.images.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

fn resolve_reference(reference: String, base_dir: &Path) -> String {
    if is_remote(&reference) || Path::new(&reference).is_absolute() {
        reference
    } else {
        base_dir.join(reference).to_string_lossy().into_owned()
    }
}

/// Installs the process-wide catalog. Only the first call has an effect.
pub fn install(catalog: Catalog) -> &'static Catalog {
    if CATALOG.set(catalog).is_err() {
        warn!("Card catalog already installed; keeping the existing one");
    }
    global()
}

/// Returns the process-wide catalog, empty if none was installed.
pub fn global() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::empty)
}
