//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Join a site base URL and a site-relative path
///
/// # Examples
/// ```ignore
/// full_url("https://example.com/", "/blog/hello") // -> "https://example.com/blog/hello"
/// ```
pub fn full_url(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Encode a slug for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Site-relative path of a route under a section, e.g. `/blog/<slug>`
pub fn route_path(section: Option<&str>, slug: &str) -> String {
    match section {
        Some(section) => format!("/{}/{}", section, encode_segment(slug)),
        None => format!("/{}", encode_segment(slug)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        assert_eq!(
            full_url("https://example.com", "/blog/hello"),
            "https://example.com/blog/hello"
        );
        assert_eq!(
            full_url("https://example.com/", "images/a.jpg"),
            "https://example.com/images/a.jpg"
        );
        assert_eq!(full_url("https://example.com/", ""), "https://example.com");
        assert_eq!(
            full_url("https://example.com", "https://cdn.example/a.jpg"),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn test_route_path() {
        assert_eq!(route_path(Some("blog"), "core-101"), "/blog/core-101");
        assert_eq!(route_path(None, "about"), "/about");
        assert_eq!(route_path(Some("blog"), "a b/c"), "/blog/a%20b%2Fc");
    }
}
