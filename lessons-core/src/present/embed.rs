//! YouTube URL to embed URL conversion

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Player parameters appended to every generated embed URL
const EMBED_PARAMS: &str =
    "rel=0&modestbranding=1&showinfo=0&autoplay=0&controls=1&fs=1&iv_load_policy=3";

static SHORT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/([^&\n?#]+)").expect("short link pattern is valid"));

static WATCH_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]v=([^&\n?#]+)").expect("watch link pattern is valid"));

/// Extract the video id from a `youtu.be` or `youtube.com/watch` link
pub fn video_id(url: &str) -> Option<&str> {
    let pattern = if url.contains("youtu.be/") {
        &*SHORT_ID
    } else if url.contains("youtube.com/watch") {
        &*WATCH_ID
    } else {
        return None;
    };
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Convert a lesson URL into a URL an embedded player can load
///
/// URLs that already mention `embed` are returned unchanged, as is anything
/// no video id can be extracted from.
pub fn embed_url(url: &str) -> String {
    if url.contains("embed") {
        return url.to_string();
    }

    match video_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{id}?{EMBED_PARAMS}"),
        None => {
            warn!("Could not extract video ID from URL: {}", url);
            url.to_string()
        }
    }
}

#[cfg(test)]
mod embed_tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(
            embed_url("https://youtu.be/8EvYzk7qOrg"),
            "https://www.youtube.com/embed/8EvYzk7qOrg?rel=0&modestbranding=1&showinfo=0&autoplay=0&controls=1&fs=1&iv_load_policy=3"
        );
    }

    #[test]
    fn test_short_link_with_query() {
        assert_eq!(video_id("https://youtu.be/abc123?t=42"), Some("abc123"));
    }

    #[test]
    fn test_watch_link() {
        assert_eq!(video_id("https://youtube.com/watch?v=xyz789"), Some("xyz789"));
        assert_eq!(
            video_id("https://www.youtube.com/watch?feature=share&v=xyz789&t=3"),
            Some("xyz789")
        );
    }

    #[test]
    fn test_embed_link_unchanged() {
        let url = "https://www.youtube.com/embed/abc?start=10";
        assert_eq!(embed_url(url), url);
    }

    #[test]
    fn test_unknown_link_unchanged() {
        let url = "https://vimeo.com/12345";
        assert_eq!(video_id(url), None);
        assert_eq!(embed_url(url), url);
    }

    #[test]
    fn test_watch_link_without_id_unchanged() {
        let url = "https://youtube.com/watch?list=PL1";
        assert_eq!(embed_url(url), url);
    }
}
