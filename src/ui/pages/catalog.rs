use dioxus::prelude::*;

use crate::{
    domain::{classify_all, AppState, SortOrder, VariantTally},
    ui::{
        components::{ShoeCard, SummaryCard},
        theme::{self, NEW_RELEASE_COLOR, SALE_COLOR},
    },
    util::format::pluralize,
};

#[component]
pub fn CatalogPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    // Variants are recomputed from the current listings on every render.
    let (cards, sort, rejected, load_error) = state.with(|st| {
        let cards = classify_all(&st.listings, &st.classifier)
            .into_iter()
            .map(|(listing, variant)| (listing.clone(), variant))
            .collect::<Vec<_>>();
        (cards, st.sort, st.rejected.clone(), st.load_error.clone())
    });
    let tally = VariantTally::count(cards.iter().map(|(_, variant)| variant));
    let count_label = pluralize("shoe", tally.total());
    let rejected_label = pluralize("listing", rejected.len());

    let on_sort = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Some(order) = SortOrder::from_id(&evt.value()) {
                state.with_mut(|st| st.set_sort(order));
            }
        }
    };

    rsx! {
        section { class: "catalog",
            header { class: "catalog__header",
                div {
                    h2 { class: "catalog__title", "Running" }
                    p { class: "catalog__count", "{count_label}" }
                }
                label { class: "catalog__sort",
                    span { "Sort" }
                    select {
                        value: "{sort.id()}",
                        onchange: on_sort,
                        for order in SortOrder::ALL {
                            option {
                                value: "{order.id()}",
                                selected: order == sort,
                                "{order.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "catalog__summary",
                SummaryCard {
                    title: "On sale".to_string(),
                    value: tally.on_sale.to_string(),
                    accent: Some(SALE_COLOR),
                }
                SummaryCard {
                    title: "Just released".to_string(),
                    value: tally.new_release.to_string(),
                    accent: Some(NEW_RELEASE_COLOR),
                }
                SummaryCard {
                    title: "Regular".to_string(),
                    value: tally.regular.to_string(),
                }
            }

            if let Some(message) = load_error {
                div { class: "{theme::notice_class(true)}",
                    "Catalog unavailable: {message}"
                }
            }

            if !rejected.is_empty() {
                div { class: "{theme::notice_class(false)}",
                    p { "Skipped {rejected_label} with invalid data:" }
                    ul {
                        for err in rejected.iter() {
                            li { "{err}" }
                        }
                    }
                }
            }

            div { class: "catalog__grid",
                for (listing, variant) in cards {
                    ShoeCard { key: "{listing.slug}", listing: listing.clone(), variant }
                }
            }
        }
    }
}
