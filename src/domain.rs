use url::Url;

/// Host part of `url`, lowercased by the URL parser. Anything without a host
/// (`about:blank`, `file:///`, garbage) yields an empty string.
#[must_use]
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .unwrap_or_default()
}
