//! Pure storefront logic: listing validation, variant classification and
//! catalog ordering.

pub mod app_state;
pub mod catalog;
pub mod listing;
pub mod variant;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use catalog::{classify_all, sort_listings, SortOrder, VariantTally};
#[allow(unused_imports)]
pub use listing::{ListingError, ShoeListing};
#[allow(unused_imports)]
pub use variant::{Variant, VariantClassifier};
