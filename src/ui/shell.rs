use dioxus::prelude::*;

use crate::domain::AppState;
use crate::util::{format::release_label, version};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let (today, window_days) = state.with(|st| (st.today(), st.classifier.window_days));
    let today_label = release_label(today);

    rsx! {
        div { class: "shell",
            header { class: "shell__header",
                div { class: "shell__bar",
                    h1 { class: "shell__logo", "Sole&Ankle" }
                }
            }
            main { class: "shell__main",
                {children}
            }
            footer { class: "shell__footer",
                span { "{version::APP_NAME} {version::version_label()}" }
                span { "Just Released: last {window_days} days, as of {today_label}" }
            }
        }
    }
}
