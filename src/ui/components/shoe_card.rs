use dioxus::prelude::*;

use super::variant_badge::VariantBadge;
use crate::domain::{ShoeListing, Variant};
use crate::ui::theme::{self, BadgeStyle, PriceDecoration};
use crate::util::format::{format_price, pluralize, release_label, shoe_href};

/// Everything a card shows, already formatted for its variant.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub variant: Variant,
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub price_label: String,
    pub price_decoration: PriceDecoration,
    pub sale_price_label: Option<String>,
    pub colors_label: String,
    pub badge: Option<BadgeStyle>,
    pub released_label: String,
}

/// Builds the card for `listing` shown as `variant`.
///
/// The sale price appears only when the variant calls for it and the listing
/// actually has one.
pub fn render(listing: &ShoeListing, variant: Variant) -> CardView {
    let style = theme::variant_style(variant);
    let sale_price_label = listing
        .sale_price
        .filter(|_| style.show_sale_price)
        .map(format_price);

    CardView {
        variant,
        href: shoe_href(&listing.slug),
        image_src: listing.image_src.clone(),
        name: listing.name.clone(),
        price_label: format_price(listing.price),
        price_decoration: style.price,
        sale_price_label,
        colors_label: pluralize("Color", listing.num_of_colors),
        badge: style.badge,
        released_label: release_label(listing.release_date),
    }
}

#[component]
pub fn ShoeCard(listing: ShoeListing, variant: Variant) -> Element {
    let CardView {
        variant,
        href,
        image_src,
        name,
        price_label,
        price_decoration,
        sale_price_label,
        colors_label,
        badge,
        released_label,
    } = render(&listing, variant);

    rsx! {
        a { class: "shoe-card__link", href: "{href}",
            article {
                class: "shoe-card shoe-card--{variant.label()}",
                title: "Released {released_label}",
                div { class: "shoe-card__image-wrapper",
                    img { class: "shoe-card__image", alt: "", src: "{image_src}" }
                }
                if let Some(badge) = badge {
                    VariantBadge { badge }
                }
                div { class: "shoe-card__row",
                    h3 { class: "shoe-card__name", "{name}" }
                    span { class: "{theme::price_class(price_decoration)}", "{price_label}" }
                }
                div { class: "shoe-card__row",
                    p { class: "shoe-card__colors", "{colors_label}" }
                    if let Some(sale_price) = sale_price_label {
                        span { class: "shoe-card__sale-price", "{sale_price}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VariantClassifier;
    use time::macros::date;

    fn listing(sale_price: Option<u32>, release_date: time::Date) -> ShoeListing {
        ShoeListing {
            slug: "woven-runner".to_string(),
            name: "Woven Runner".to_string(),
            image_src: "/assets/woven-runner.jpg".to_string(),
            price: 12500,
            sale_price,
            release_date,
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_on_sale_card_strikes_regular_and_shows_both_prices() {
        let view = render(&listing(Some(8500), date!(2020 - 01 - 01)), Variant::OnSale);
        assert_eq!(view.price_label, "$125.00");
        assert_eq!(view.price_decoration, PriceDecoration::StruckThrough);
        assert_eq!(view.sale_price_label.as_deref(), Some("$85.00"));
        assert_eq!(view.badge.map(|b| b.text), Some("Sale"));
    }

    #[test]
    fn test_default_card_shows_only_regular_price() {
        let view = render(&listing(None, date!(2023 - 01 - 01)), Variant::Default);
        assert_eq!(view.price_label, "$125.00");
        assert_eq!(view.price_decoration, PriceDecoration::Plain);
        assert_eq!(view.sale_price_label, None);
        assert_eq!(view.badge, None);
    }

    #[test]
    fn test_new_release_card() {
        let view = render(&listing(None, date!(2024 - 06 - 01)), Variant::NewRelease);
        assert_eq!(view.badge.map(|b| b.text), Some("Just Released"));
        assert_eq!(view.price_decoration, PriceDecoration::Plain);
        assert_eq!(view.sale_price_label, None);
    }

    #[test]
    fn test_common_fields_always_rendered() {
        for variant in Variant::ALL {
            let view = render(&listing(Some(8500), date!(2024 - 06 - 01)), variant);
            assert_eq!(view.href, "/shoe/woven-runner");
            assert_eq!(view.name, "Woven Runner");
            assert_eq!(view.image_src, "/assets/woven-runner.jpg");
            assert_eq!(view.colors_label, "3 Colors");
            assert_eq!(view.variant, variant);
        }
    }

    #[test]
    fn test_sale_price_hidden_unless_variant_is_on_sale() {
        let view = render(&listing(Some(8500), date!(2024 - 06 - 01)), Variant::NewRelease);
        assert_eq!(view.sale_price_label, None);
    }

    #[test]
    fn test_single_color_label() {
        let mut shoe = listing(None, date!(2023 - 01 - 01));
        shoe.num_of_colors = 1;
        assert_eq!(render(&shoe, Variant::Default).colors_label, "1 Color");
    }

    #[test]
    fn test_classified_then_rendered() {
        let classifier = VariantClassifier::new(date!(2024 - 06 - 15));
        let shoe = listing(Some(8500), date!(2024 - 06 - 10));
        let view = render(&shoe, classifier.classify(&shoe));
        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.sale_price_label.as_deref(), Some("$85.00"));
    }
}
