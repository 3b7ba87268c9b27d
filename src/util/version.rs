pub const APP_NAME: &str = "Cup Profit Planner";
pub const APP_REPO_URL: &str = "https://github.com/narintee/cup_profit_planner";
/// Hosted web build of the planner; share links point here so anyone can
/// open them without installing the desktop app.
pub const SHARE_PAGE_URL: &str = "https://narintee.github.io/cup_profit_planner/";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}
