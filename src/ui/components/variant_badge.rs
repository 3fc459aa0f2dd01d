use dioxus::prelude::*;

use crate::ui::theme::BadgeStyle;

#[component]
pub fn VariantBadge(badge: BadgeStyle) -> Element {
    rsx! {
        span {
            class: "shoe-card__badge",
            style: "background-color: {badge.background};",
            "{badge.text}"
        }
    }
}
