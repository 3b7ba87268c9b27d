use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: theme::PAGE,
            div { class: "w-full max-w-3xl",
                header { class: "mb-6",
                    h1 { class: "text-2xl md:text-3xl font-semibold text-neutral-900 tracking-tight",
                        "{version::APP_NAME}"
                    }
                    p { class: "text-neutral-500 mt-1",
                        "Enter the cost, the selling price, and the profit you want. \
                         The planner works out the cups and totals as you type."
                    }
                }
                {children}
                footer { class: "mt-10 text-center text-xs text-neutral-400",
                    a {
                        href: version::APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        class: "hover:text-neutral-600",
                        "{version::APP_NAME} {version::version_label()}"
                    }
                }
            }
        }
    }
}
