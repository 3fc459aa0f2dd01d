//! Catalog loading: bundled JSON or a file named in the config.

use std::{collections::HashSet, fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::listing::{ListingError, RawListing, ShoeListing};
use crate::util::{assets, config::AppConfig};

/// Result of validating a catalog. Bad listings are kept aside, not dropped
/// silently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub listings: Vec<ShoeListing>,
    pub rejected: Vec<ListingError>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("bundled catalog asset {0} is missing")]
    MissingEmbedded(&'static str),
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepts either a bare array of listings or `{ "shoes": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<serde_json::Value>),
    Wrapped { shoes: Vec<serde_json::Value> },
}

pub fn load_catalog(config: &AppConfig) -> Result<Catalog, CatalogError> {
    match config.catalog_path.as_deref() {
        Some(path) => load_catalog_file(path),
        None => {
            let data = assets::load_text(assets::CATALOG_ASSET)
                .ok_or(CatalogError::MissingEmbedded(assets::CATALOG_ASSET))?;
            parse_catalog(&data)
        }
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&data)
}

/// Validates every record. A record that fails to decode or validate lands in
/// `rejected`; a repeated slug keeps the first occurrence.
pub fn parse_catalog(data: &str) -> Result<Catalog, CatalogError> {
    let records = match serde_json::from_str::<CatalogDocument>(data)? {
        CatalogDocument::List(records) => records,
        CatalogDocument::Wrapped { shoes } => shoes,
    };

    let mut catalog = Catalog::default();
    let mut seen = HashSet::new();

    for (idx, record) in records.into_iter().enumerate() {
        let slug_hint = record
            .get("slug")
            .and_then(|slug| slug.as_str())
            .unwrap_or_default()
            .to_string();

        let result = serde_json::from_value::<RawListing>(record)
            .map_err(|err| ListingError::InvalidInput {
                slug: slug_hint,
                field: "record",
                reason: err.to_string(),
            })
            .and_then(ShoeListing::try_from)
            .and_then(|listing| {
                if seen.insert(listing.slug.clone()) {
                    Ok(listing)
                } else {
                    Err(ListingError::DuplicateSlug { slug: listing.slug })
                }
            });

        match result {
            Ok(listing) => catalog.listings.push(listing),
            Err(err) => {
                tracing::warn!(index = idx, slug = err.slug(), error = %err, "Rejected catalog listing");
                catalog.rejected.push(err);
            }
        }
    }

    tracing::info!(
        listings = catalog.listings.len(),
        rejected = catalog.rejected.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
