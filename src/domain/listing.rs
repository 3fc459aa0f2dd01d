use serde::{Deserialize, Deserializer};
use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    UtcOffset,
};

/// A validated shoe record, ready to classify and render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Regular price in minor currency units (cents).
    pub price: u32,
    /// Discounted price in minor units. `None` means the shoe is not on sale.
    pub sale_price: Option<u32>,
    pub release_date: Date,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// The amount a shopper actually pays.
    pub fn effective_price(&self) -> u32 {
        self.sale_price.unwrap_or(self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("listing {slug:?} is missing `{field}`")]
    MissingField { slug: String, field: &'static str },
    #[error("listing {slug:?} has invalid `{field}`: {reason}")]
    InvalidInput {
        slug: String,
        field: &'static str,
        reason: String,
    },
    #[error("listing {slug:?} appears more than once in the catalog")]
    DuplicateSlug { slug: String },
}

impl ListingError {
    pub fn slug(&self) -> &str {
        match self {
            ListingError::MissingField { slug, .. }
            | ListingError::InvalidInput { slug, .. }
            | ListingError::DuplicateSlug { slug } => slug,
        }
    }
}

/// Listing as it appears in catalog JSON, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_src: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "lenient_minor_units")]
    pub sale_price: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub num_of_colors: Option<i64>,
}

impl TryFrom<RawListing> for ShoeListing {
    type Error = ListingError;

    fn try_from(raw: RawListing) -> Result<Self, Self::Error> {
        let slug = raw.slug.trim().to_string();
        if slug.is_empty() {
            return Err(ListingError::MissingField {
                slug: String::new(),
                field: "slug",
            });
        }
        if raw.name.trim().is_empty() {
            return Err(ListingError::MissingField { slug, field: "name" });
        }
        if raw.image_src.trim().is_empty() {
            return Err(ListingError::MissingField {
                slug,
                field: "imageSrc",
            });
        }

        let price = match raw.price {
            Some(value) => u32::try_from(value).map_err(|_| ListingError::InvalidInput {
                slug: slug.clone(),
                field: "price",
                reason: format!("{value} is not a non-negative amount in minor units"),
            })?,
            None => {
                return Err(ListingError::InvalidInput {
                    slug,
                    field: "price",
                    reason: "missing".to_string(),
                })
            }
        };

        let release_date = match raw.release_date.as_deref() {
            Some(value) => parse_release_date(value).map_err(|err| match err {
                ListingError::InvalidInput { field, reason, .. } => ListingError::InvalidInput {
                    slug: slug.clone(),
                    field,
                    reason,
                },
                other => other,
            })?,
            None => {
                return Err(ListingError::InvalidInput {
                    slug,
                    field: "releaseDate",
                    reason: "missing".to_string(),
                })
            }
        };

        // Color counts below one are rejected rather than clamped.
        let num_of_colors = match raw.num_of_colors {
            Some(count) if count >= 1 => {
                u32::try_from(count).map_err(|_| ListingError::InvalidInput {
                    slug: slug.clone(),
                    field: "numOfColors",
                    reason: format!("{count} is out of range"),
                })?
            }
            Some(count) => {
                return Err(ListingError::InvalidInput {
                    slug,
                    field: "numOfColors",
                    reason: format!("expected at least 1, got {count}"),
                })
            }
            None => {
                return Err(ListingError::InvalidInput {
                    slug,
                    field: "numOfColors",
                    reason: "missing".to_string(),
                })
            }
        };

        Ok(ShoeListing {
            slug,
            name: raw.name,
            image_src: raw.image_src,
            price,
            sale_price: raw.sale_price,
            release_date,
            num_of_colors,
        })
    }
}

/// Parses a release date given either as an RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` calendar date. Timestamps are moved to UTC before the date
/// part is taken, matching the UTC "today" the classifier is given.
pub fn parse_release_date(value: &str) -> Result<Date, ListingError> {
    let trimmed = value.trim();
    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(timestamp.to_offset(UtcOffset::UTC).date());
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|err| {
        ListingError::InvalidInput {
            slug: String::new(),
            field: "releaseDate",
            reason: format!("{trimmed:?} is not a date ({err})"),
        }
    })
}

/// Accepts only whole non-negative numbers; anything else means "not on sale".
fn lenient_minor_units<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value
        .as_u64()
        .and_then(|amount| u32::try_from(amount).ok())
        .or_else(|| value.as_f64().and_then(whole_minor_units));
    if parsed.is_none() && !value.is_null() {
        tracing::debug!(sale_price = %value, "Ignoring non-numeric sale price");
    }
    Ok(parsed)
}

/// Integer-valued floats such as `9500.0` are still whole amounts.
fn whole_minor_units(amount: f64) -> Option<u32> {
    let in_range = amount.is_finite() && amount >= 0.0 && amount <= f64::from(u32::MAX);
    if in_range && amount.fract() == 0.0 {
        Some(amount as u32)
    } else {
        None
    }
}
