use dioxus::prelude::*;

#[component]
pub fn SummaryCard(
    title: String,
    value: String,
    description: Option<String>,
    accent: Option<&'static str>,
) -> Element {
    let accent_style = accent
        .map(|color| format!("border-top-color: {color};"))
        .unwrap_or_default();
    rsx! {
        div {
            class: "summary-card",
            style: "{accent_style}",
            h3 { class: "summary-card__title", "{title}" }
            p { class: "summary-card__value", "{value}" }
            if let Some(desc) = description {
                p { class: "summary-card__description", "{desc}" }
            }
        }
    }
}
