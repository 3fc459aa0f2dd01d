//! Variant presentation table and shared class names.

use crate::domain::Variant;

pub const SALE_COLOR: &str = "hsla(340, 65%, 47%, 1)";
pub const NEW_RELEASE_COLOR: &str = "hsla(240, 60%, 63%, 1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub text: &'static str,
    pub background: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceDecoration {
    #[default]
    Plain,
    /// Regular price superseded by a sale price.
    StruckThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub variant: Variant,
    pub badge: Option<BadgeStyle>,
    pub price: PriceDecoration,
    pub show_sale_price: bool,
}

// Indexed by `Variant as usize`; keep in declaration order.
static VARIANT_STYLES: [VariantStyle; 3] = [
    VariantStyle {
        variant: Variant::OnSale,
        badge: Some(BadgeStyle {
            text: "Sale",
            background: SALE_COLOR,
        }),
        price: PriceDecoration::StruckThrough,
        show_sale_price: true,
    },
    VariantStyle {
        variant: Variant::NewRelease,
        badge: Some(BadgeStyle {
            text: "Just Released",
            background: NEW_RELEASE_COLOR,
        }),
        price: PriceDecoration::Plain,
        show_sale_price: false,
    },
    VariantStyle {
        variant: Variant::Default,
        badge: None,
        price: PriceDecoration::Plain,
        show_sale_price: false,
    },
];

pub fn variant_style(variant: Variant) -> &'static VariantStyle {
    &VARIANT_STYLES[variant as usize]
}

pub fn price_class(decoration: PriceDecoration) -> &'static str {
    match decoration {
        PriceDecoration::Plain => "shoe-card__price",
        PriceDecoration::StruckThrough => "shoe-card__price shoe-card__price--struck",
    }
}

pub fn notice_class(is_error: bool) -> &'static str {
    if is_error {
        "notice notice--error"
    } else {
        "notice notice--warning"
    }
}
