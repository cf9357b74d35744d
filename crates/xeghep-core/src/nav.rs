// crates/xeghep-core/src/nav.rs
// Active navigation link matching

/// Last path segment, e.g. `gioi_thieu.html` for `/pages/gioi_thieu.html`
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Normalize a page file name to the key used by `data-page` attributes
pub fn page_key(file: &str) -> String {
    let file = file.to_lowercase();
    match file.as_str() {
        "" | "index.html" | "index.htm" => "home".to_string(),
        "gioi_thieu.html" | "gioi-thieu.html" => "gioi-thieu".to_string(),
        "xe_ghep_vinh_yen.html" | "xe-ghep-vinh-yen.html" => "xe-ghep".to_string(),
        other => other.replacen(".html", "", 1).replace('_', "-"),
    }
}

fn is_home_file(file: &str) -> bool {
    file.is_empty() || file == "index.html"
}

/// The page currently shown, resolved once per highlighting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePage {
    file: String,
    key: String,
}

impl ActivePage {
    pub fn from_path(path: &str) -> Self {
        let file = last_segment(path).to_lowercase();
        let key = page_key(&file);
        Self { file, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a nav link with these attributes points at this page.
    ///
    /// `data-page` wins when it matches; otherwise the href's file name is
    /// normalized the same way, with `/` and `index.html` treated as home.
    pub fn matches(&self, data_page: Option<&str>, href: Option<&str>) -> bool {
        if data_page.is_some_and(|p| !p.is_empty() && p == self.key) {
            return true;
        }

        let Some(href) = href.filter(|h| !h.is_empty()) else {
            return false;
        };
        let link_file = last_segment(href).to_lowercase();
        if page_key(&link_file) == self.key {
            return true;
        }

        (href == "/" || is_home_file(&link_file)) && is_home_file(&self.file)
    }
}
