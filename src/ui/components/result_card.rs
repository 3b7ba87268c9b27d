use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn ResultCard(title: &'static str, value: String, sub: Option<String>) -> Element {
    rsx! {
        div { class: theme::RESULT_CARD,
            div { class: theme::RESULT_TITLE, "{title}" }
            div { class: theme::RESULT_VALUE, "{value}" }
            if let Some(sub) = sub {
                div { class: theme::RESULT_SUB, "{sub}" }
            }
        }
    }
}
