use time::Date;

use super::catalog::{sort_listings, SortOrder};
use super::listing::{ListingError, ShoeListing};
use super::variant::VariantClassifier;

/// Everything the catalog page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Valid listings, kept in `sort` order.
    pub listings: Vec<ShoeListing>,
    /// Listings dropped during validation, shown to the user.
    pub rejected: Vec<ListingError>,
    /// Set when the catalog itself could not be read.
    pub load_error: Option<String>,
    pub classifier: VariantClassifier,
    pub sort: SortOrder,
}

impl AppState {
    pub fn new(classifier: VariantClassifier) -> Self {
        Self {
            listings: Vec::new(),
            rejected: Vec::new(),
            load_error: None,
            classifier,
            sort: SortOrder::default(),
        }
    }

    pub fn today(&self) -> Date {
        self.classifier.today
    }

    pub fn set_listings(&mut self, listings: Vec<ShoeListing>, rejected: Vec<ListingError>) {
        self.listings = listings;
        self.rejected = rejected;
        sort_listings(&mut self.listings, self.sort);
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        if self.sort != sort {
            self.sort = sort;
            sort_listings(&mut self.listings, sort);
        }
    }
}
