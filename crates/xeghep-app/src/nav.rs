// crates/xeghep-app/src/nav.rs
// Active nav link highlighting

use web_sys::Document;
use xeghep_core::nav::ActivePage;

use crate::dom;

const NAV_LINK_SELECTOR: &str = ".main-nav a";

/// Mark the nav links that point at the current page as `active`
pub fn highlight_nav_links(document: &Document) {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    if links.is_empty() {
        return;
    }

    let path = dom::window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let page = ActivePage::from_path(&path);

    let mut active = 0;
    for link in &links {
        let data_page = link.get_attribute("data-page");
        let href = link.get_attribute("href");
        let is_active = page.matches(data_page.as_deref(), href.as_deref());
        dom::set_class(link, "active", is_active);
        active += usize::from(is_active);
    }
    log::debug!("Nav highlight for '{}': {} active link(s)", page.key(), active);
}
