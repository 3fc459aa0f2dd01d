//! Display variant classification for shoe cards.
//!
//! A card shows exactly one variant. Eligibility for each variant can overlap
//! (a shoe can be both discounted and freshly released), so the rules are kept
//! as an ordered list and the first rule that matches decides.

#![allow(dead_code)]

use time::{Date, Duration};

use super::listing::ShoeListing;

/// Number of days a release counts as "just released".
pub const NEW_RELEASE_WINDOW_DAYS: u16 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    OnSale,
    NewRelease,
    #[default]
    Default,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::OnSale, Variant::NewRelease, Variant::Default];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

/// The two facts a variant is decided from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Eligibility {
    on_sale: bool,
    recent_release: bool,
}

struct Rule {
    variant: Variant,
    applies: fn(&Eligibility) -> bool,
}

/// Priority order, highest first. The last rule always matches.
const RULES: [Rule; 3] = [
    Rule {
        variant: Variant::OnSale,
        applies: on_sale,
    },
    Rule {
        variant: Variant::NewRelease,
        applies: recent_release,
    },
    Rule {
        variant: Variant::Default,
        applies: always,
    },
];

fn on_sale(eligibility: &Eligibility) -> bool {
    eligibility.on_sale
}

fn recent_release(eligibility: &Eligibility) -> bool {
    eligibility.recent_release
}

fn always(_: &Eligibility) -> bool {
    true
}

fn resolve(eligibility: Eligibility) -> Variant {
    RULES
        .iter()
        .find(|rule| (rule.applies)(&eligibility))
        .map(|rule| rule.variant)
        .unwrap_or_default()
}

/// Returns true when `release_date` is less than `window_days` days before
/// `today`. A release exactly `window_days` old is no longer recent; a release
/// dated after `today` is.
pub fn is_recent_release_within(release_date: Date, today: Date, window_days: u16) -> bool {
    today - release_date < Duration::days(i64::from(window_days))
}

pub fn is_recent_release(release_date: Date, today: Date) -> bool {
    is_recent_release_within(release_date, today, NEW_RELEASE_WINDOW_DAYS)
}

/// Picks the card variant using the default 30 day window.
///
/// Sale status wins over a recent release.
pub fn classify(sale_price: Option<u32>, release_date: Date, today: Date) -> Variant {
    VariantClassifier::new(today).classify_parts(sale_price, release_date)
}

/// Classifier bound to a reference date and a new-release window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantClassifier {
    pub today: Date,
    pub window_days: u16,
}

impl VariantClassifier {
    pub fn new(today: Date) -> Self {
        Self {
            today,
            window_days: NEW_RELEASE_WINDOW_DAYS,
        }
    }

    pub fn with_window(mut self, window_days: u16) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn classify(&self, listing: &ShoeListing) -> Variant {
        self.classify_parts(listing.sale_price, listing.release_date)
    }

    pub fn classify_parts(&self, sale_price: Option<u32>, release_date: Date) -> Variant {
        resolve(Eligibility {
            on_sale: sale_price.is_some(),
            recent_release: is_recent_release_within(release_date, self.today, self.window_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 15);

    #[test]
    fn test_recent_release_without_sale_is_new_release() {
        assert_eq!(classify(None, date!(2024 - 06 - 01), TODAY), Variant::NewRelease);
    }

    #[test]
    fn test_old_release_on_sale_is_on_sale() {
        assert_eq!(classify(Some(8500), date!(2020 - 01 - 01), TODAY), Variant::OnSale);
    }

    #[test]
    fn test_sale_beats_recent_release() {
        assert_eq!(classify(Some(8500), date!(2024 - 06 - 10), TODAY), Variant::OnSale);
    }

    #[test]
    fn test_old_release_without_sale_is_default() {
        assert_eq!(classify(None, date!(2023 - 01 - 01), TODAY), Variant::Default);
    }

    #[test]
    fn test_sale_price_of_zero_still_counts_as_on_sale() {
        assert_eq!(classify(Some(0), date!(2019 - 03 - 03), TODAY), Variant::OnSale);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        // 29 days old
        assert!(is_recent_release(date!(2024 - 05 - 17), TODAY));
        // 30 days old
        assert!(!is_recent_release(date!(2024 - 05 - 16), TODAY));
        assert_eq!(classify(None, date!(2024 - 05 - 16), TODAY), Variant::Default);
    }

    #[test]
    fn test_release_today_and_future_release_are_recent() {
        assert!(is_recent_release(TODAY, TODAY));
        assert!(is_recent_release(date!(2024 - 07 - 01), TODAY));
    }

    #[test]
    fn test_window_spans_month_and_year_ends() {
        let today = date!(2025 - 01 - 10);
        assert!(is_recent_release(date!(2024 - 12 - 20), today));
        assert!(!is_recent_release(date!(2024 - 11 - 30), today));
    }

    #[test]
    fn test_custom_window() {
        let classifier = VariantClassifier::new(TODAY).with_window(7);
        assert_eq!(
            classifier.classify_parts(None, date!(2024 - 06 - 10)),
            Variant::NewRelease
        );
        assert_eq!(
            classifier.classify_parts(None, date!(2024 - 06 - 01)),
            Variant::Default
        );
    }

    #[test]
    fn test_classification_is_repeatable() {
        let inputs = [
            (None, date!(2024 - 06 - 01)),
            (Some(8500), date!(2020 - 01 - 01)),
            (Some(8500), date!(2024 - 06 - 10)),
            (None, date!(2023 - 01 - 01)),
        ];
        for (sale_price, release_date) in inputs {
            let first = classify(sale_price, release_date, TODAY);
            let second = classify(sale_price, release_date, TODAY);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_every_eligibility_combination_yields_one_variant() {
        let cases = [
            (true, true, Variant::OnSale),
            (true, false, Variant::OnSale),
            (false, true, Variant::NewRelease),
            (false, false, Variant::Default),
        ];
        for (on_sale, recent_release, expected) in cases {
            let matched = resolve(Eligibility {
                on_sale,
                recent_release,
            });
            assert_eq!(matched, expected);
        }
    }
}
