//! Share links: the current scenario reflected into URL query parameters,
//! plus the clipboard bridge that hands the link to the platform.

// The parse direction is part of the share-link contract even though the
// desktop shell only ever writes links.
#![allow(dead_code)]

use std::sync::OnceLock;

use dioxus::document;
use url::Url;

use crate::domain::{coerce_amount, Scenario};
use crate::util::version::SHARE_PAGE_URL;

pub const COST_PARAM: &str = "cost";
pub const PRICE_PARAM: &str = "price";
pub const PROFIT_PARAM: &str = "profit";

/// The fixed page share links are built against. A desktop window has no
/// location of its own, so the hosted web build stands in for it.
pub fn share_base() -> &'static Url {
    static BASE: OnceLock<Url> = OnceLock::new();
    BASE.get_or_init(|| {
        Url::parse(SHARE_PAGE_URL)
            .unwrap_or_else(|err| panic!("Share page URL constant is invalid: {err}"))
    })
}

/// Returns `base` with `cost`, `price` and `profit` set to the decimal
/// string form of the scenario. Existing values for those three keys are
/// overwritten; every other part of the URL is left alone.
pub fn share_link(base: &Url, scenario: &Scenario) -> Url {
    let mut link = base.clone();
    let retained: Vec<(String, String)> = link
        .query_pairs()
        .filter(|(key, _)| key != COST_PARAM && key != PRICE_PARAM && key != PROFIT_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = link.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(COST_PARAM, &scenario.cost_per_cup.to_string());
        pairs.append_pair(PRICE_PARAM, &scenario.price_per_cup.to_string());
        pairs.append_pair(PROFIT_PARAM, &scenario.target_profit.to_string());
    }

    link
}

/// Reads a scenario back out of a shared link, coercing each parameter the
/// same way the input fields do. Returns `None` when the link carries none
/// of the three keys; absent keys fall back to the canonical default.
pub fn parse_shared_scenario(link: &Url) -> Option<Scenario> {
    let mut scenario = Scenario::default();
    let mut seen = false;

    for (key, value) in link.query_pairs() {
        match key.as_ref() {
            COST_PARAM => {
                scenario.cost_per_cup = coerce_amount(&value);
                seen = true;
            }
            PRICE_PARAM => {
                scenario.price_per_cup = coerce_amount(&value);
                seen = true;
            }
            PROFIT_PARAM => {
                scenario.target_profit = coerce_amount(&value);
                seen = true;
            }
            _ => {}
        }
    }

    seen.then_some(scenario)
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard bridge failed: {0}")]
    Bridge(String),
    #[error("clipboard write rejected by the platform")]
    Rejected,
}

/// Writes `text` to the platform clipboard through the webview. Prefers the
/// async clipboard API and falls back to a hidden textarea where the API is
/// unavailable (older WebKit builds).
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{
                // fallback
            }}
            try {{
                const textarea = document.createElement('textarea');
                textarea.value = data;
                textarea.style.position = 'fixed';
                textarea.style.opacity = '0';
                document.body.appendChild(textarea);
                textarea.focus();
                textarea.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(textarea);
                return ok;
            }} catch (_err) {{
                return false;
            }}
        }})()"#
    );

    match document::eval(&script).await {
        Ok(value) if value.as_bool().unwrap_or(false) => Ok(()),
        Ok(_) => Err(ClipboardError::Rejected),
        Err(err) => Err(ClipboardError::Bridge(err.to_string())),
    }
}
