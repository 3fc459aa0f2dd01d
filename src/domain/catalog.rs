use super::listing::ShoeListing;
use super::variant::{Variant, VariantClassifier};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Price,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Price];

    pub fn id(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest Releases",
            SortOrder::Price => "Price",
        }
    }

    pub fn from_id(id: &str) -> Option<SortOrder> {
        Self::ALL.into_iter().find(|order| order.id() == id)
    }
}

/// Sorts in place. Newest puts the latest release first; Price puts the
/// cheapest shoe first using what the shopper pays. Ties fall back to slug.
pub fn sort_listings(listings: &mut [ShoeListing], order: SortOrder) {
    match order {
        SortOrder::Newest => listings.sort_by(|a, b| {
            b.release_date
                .cmp(&a.release_date)
                .then_with(|| a.slug.cmp(&b.slug))
        }),
        SortOrder::Price => listings.sort_by(|a, b| {
            a.effective_price()
                .cmp(&b.effective_price())
                .then_with(|| a.slug.cmp(&b.slug))
        }),
    }
}

/// Listings paired with their variant, in catalog order.
pub fn classify_all<'a>(
    listings: &'a [ShoeListing],
    classifier: &VariantClassifier,
) -> Vec<(&'a ShoeListing, Variant)> {
    listings
        .iter()
        .map(|listing| (listing, classifier.classify(listing)))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariantTally {
    pub on_sale: usize,
    pub new_release: usize,
    pub regular: usize,
}

impl VariantTally {
    pub fn count<'a>(variants: impl IntoIterator<Item = &'a Variant>) -> Self {
        variants
            .into_iter()
            .fold(VariantTally::default(), |mut tally, variant| {
                match variant {
                    Variant::OnSale => tally.on_sale += 1,
                    Variant::NewRelease => tally.new_release += 1,
                    Variant::Default => tally.regular += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.on_sale + self.new_release + self.regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn listing(slug: &str, price: u32, sale_price: Option<u32>, release_date: time::Date) -> ShoeListing {
        ShoeListing {
            slug: slug.to_string(),
            name: slug.to_string(),
            image_src: format!("/assets/{slug}.jpg"),
            price,
            sale_price,
            release_date,
            num_of_colors: 1,
        }
    }

    fn slugs(listings: &[ShoeListing]) -> Vec<&str> {
        listings.iter().map(|l| l.slug.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut listings = vec![
            listing("old", 100, None, date!(2023 - 01 - 01)),
            listing("new", 100, None, date!(2024 - 06 - 01)),
            listing("mid", 100, None, date!(2024 - 01 - 01)),
        ];
        sort_listings(&mut listings, SortOrder::Newest);
        assert_eq!(slugs(&listings), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_price_uses_sale_price_when_present() {
        let mut listings = vec![
            listing("cheap", 6000, None, date!(2023 - 01 - 01)),
            listing("discounted", 12000, Some(5000), date!(2023 - 01 - 01)),
            listing("pricey", 16500, None, date!(2023 - 01 - 01)),
        ];
        sort_listings(&mut listings, SortOrder::Price);
        assert_eq!(slugs(&listings), vec!["discounted", "cheap", "pricey"]);
    }

    #[test]
    fn test_ties_break_on_slug() {
        let mut listings = vec![
            listing("b", 100, None, date!(2024 - 01 - 01)),
            listing("a", 100, None, date!(2024 - 01 - 01)),
        ];
        sort_listings(&mut listings, SortOrder::Newest);
        assert_eq!(slugs(&listings), vec!["a", "b"]);
        sort_listings(&mut listings, SortOrder::Price);
        assert_eq!(slugs(&listings), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_order_ids_round_trip_through_select_values() {
        assert_eq!(SortOrder::from_id("price"), Some(SortOrder::Price));
        assert_eq!(SortOrder::from_id("newest"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::from_id("rating"), None);
    }

    #[test]
    fn test_tally_counts_each_variant() {
        let classifier = VariantClassifier::new(date!(2024 - 06 - 15));
        let listings = vec![
            listing("sale", 100, Some(80), date!(2024 - 06 - 10)),
            listing("fresh", 100, None, date!(2024 - 06 - 01)),
            listing("plain", 100, None, date!(2023 - 01 - 01)),
            listing("plain-2", 100, None, date!(2022 - 01 - 01)),
        ];
        let classified = classify_all(&listings, &classifier);
        let tally = VariantTally::count(classified.iter().map(|(_, variant)| variant));
        assert_eq!(
            tally,
            VariantTally {
                on_sale: 1,
                new_release: 1,
                regular: 2
            }
        );
        assert_eq!(tally.total(), listings.len());
    }
}
