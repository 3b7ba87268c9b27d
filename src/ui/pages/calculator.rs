//! The planner page: three inputs, three projected results, two actions.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::{
    domain::{project, Scenario},
    ui::components::{InputCard, ResultCard},
    ui::theme,
    util::{format, share},
};

/// Shown in place of a number whenever the goal is unreachable.
const PLACEHOLDER: &str = "—";

/// How long the share button reports "Copied!" before reverting.
const COPIED_RESET_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn CalculatorPage() -> Element {
    let mut cost_input = use_signal(|| Scenario::default().cost_per_cup.to_string());
    let mut price_input = use_signal(|| Scenario::default().price_per_cup.to_string());
    let mut profit_input = use_signal(|| Scenario::default().target_profit.to_string());

    // The raw field strings are the single source of truth; everything shown
    // below is recomputed from them on every render.
    let scenario = Scenario::from_inputs(&cost_input(), &price_input(), &profit_input());
    let outlook = project(&scenario);
    let achievable = outlook.is_achievable();

    let (cups_value, cups_sub) = if achievable {
        (
            format::count(outlook.cups_needed),
            format!("At a margin of {} per cup", format::baht(outlook.margin_per_cup)),
        )
    } else {
        (
            PLACEHOLDER.to_string(),
            "The margin per cup must be above zero".to_string(),
        )
    };

    let (cost_value, cost_sub) = if achievable {
        (
            format::baht(outlook.total_cost),
            format!("Cost per cup {}", format::baht(scenario.cost_per_cup)),
        )
    } else {
        (
            PLACEHOLDER.to_string(),
            "Check the selling price and the cost".to_string(),
        )
    };

    let (revenue_value, revenue_sub) = if achievable {
        (
            format::baht(outlook.revenue_at_goal),
            format!("Projected profit {}", format::baht(outlook.profit_at_goal)),
        )
    } else {
        (PLACEHOLDER.to_string(), PLACEHOLDER.to_string())
    };

    let on_reset = move |_| {
        let defaults = Scenario::default();
        cost_input.set(defaults.cost_per_cup.to_string());
        price_input.set(defaults.price_per_cup.to_string());
        profit_input.set(defaults.target_profit.to_string());
    };

    rsx! {
        div { class: "grid gap-4 md:gap-6 md:grid-cols-3",
            InputCard {
                label: "Cost per cup (THB)",
                value: cost_input(),
                hint: "Ingredients, cup, lid, straw.",
                placeholder: "e.g. 10",
                oninput: move |value| cost_input.set(value),
            }
            InputCard {
                label: "Price per cup (THB)",
                value: price_input(),
                hint: "What a customer actually pays.",
                placeholder: "e.g. 25",
                oninput: move |value| price_input.set(value),
            }
            InputCard {
                label: "Target profit (THB)",
                value: profit_input(),
                hint: "The total profit you are aiming for.",
                placeholder: "e.g. 7000",
                step: "100",
                oninput: move |value| profit_input.set(value),
            }
        }

        div { class: "mt-6 grid gap-4 md:gap-6 md:grid-cols-3",
            ResultCard { title: "Cups to sell", value: cups_value, sub: Some(cups_sub) }
            ResultCard { title: "Total cost", value: cost_value, sub: Some(cost_sub) }
            ResultCard { title: "Revenue at goal", value: revenue_value, sub: Some(revenue_sub) }
        }

        div { class: "mt-8 flex flex-wrap items-center gap-3",
            button { class: theme::BTN_PRIMARY, onclick: on_reset, "Reset example" }
            ShareButton { scenario }
        }

        HowItWorks {}
    }
}

#[component]
fn ShareButton(scenario: Scenario) -> Element {
    let copied = use_signal(|| false);

    let on_copy = move |_| {
        let link = share::share_link(share::share_base(), &scenario).to_string();
        let mut copied = copied.clone();
        spawn(async move {
            match share::copy_to_clipboard(&link).await {
                Ok(()) => {
                    copied.set(true);
                    let mut copied = copied.clone();
                    spawn(async move {
                        sleep(COPIED_RESET_DELAY).await;
                        copied.set(false);
                    });
                }
                Err(err) => println!("Could not copy the share link: {err}"),
            }
        });
    };

    rsx! {
        button {
            class: theme::BTN_SECONDARY,
            onclick: on_copy,
            if copied() {
                "Copied!"
            } else {
                "Share link"
            }
        }
    }
}

#[component]
fn HowItWorks() -> Element {
    rsx! {
        section { class: "{theme::SECTION} mt-10",
            h2 { class: "text-lg font-semibold text-neutral-900", "The math, step by step" }
            ol { class: "mt-2 space-y-1 list-decimal list-inside text-neutral-700",
                li { "Margin per cup = selling price minus cost." }
                li { "Cups to sell = target profit divided by the margin, rounded up to a whole cup." }
                li { "Total cost = cups to sell times cost per cup." }
            }
        }
    }
}
