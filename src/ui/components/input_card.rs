use dioxus::prelude::*;

use crate::ui::theme;

/// One labeled numeric field in a card, with a hint line underneath.
/// The raw string value is owned by the page; every keystroke flows back
/// through `oninput` so the projection can recompute immediately.
#[component]
pub fn InputCard(
    label: &'static str,
    value: String,
    hint: &'static str,
    placeholder: &'static str,
    #[props(default = "1")] step: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: theme::CARD,
            label { class: theme::LABEL, "{label}" }
            input {
                class: theme::INPUT,
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                step: step,
                value: value,
                placeholder: placeholder,
                oninput: move |evt| oninput.call(evt.value()),
            }
            p { class: theme::HINT, "{hint}" }
        }
    }
}
