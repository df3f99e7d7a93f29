use crate::api::ListingType;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const FEATURED_LIMIT: usize = 6;

/// Listing page URL for a free-text search, optionally pinned to a tab.
pub fn search_href(query: &str, kind: Option<ListingType>) -> String {
    let mut params = Vec::new();
    if let Some(kind) = kind {
        params.push(format!("type={}", kind.as_str()));
    }
    let query = query.trim();
    if !query.is_empty() {
        params.push(format!("search={}", utf8_percent_encode(query, NON_ALPHANUMERIC)));
    }
    if params.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{}", params.join("&"))
    }
}
