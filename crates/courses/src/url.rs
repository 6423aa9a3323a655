use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        // domain, localhost, or dotted quad
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        // port
        r"(?::\d+)?",
        // path or query
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("url pattern");
}

/// Does `s` look like an http(s) or ftp(s) URL we're happy to link to?
pub fn is_valid_url(s: &str) -> bool {
    URL_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::is_valid_url;

    #[test]
    fn test_accepts() {
        for url in [
            "https://example.com/",
            "http://x.org",
            "HTTP://WWW.EXAMPLE.AC.UK/teaching/fm?year=2024",
            "ftp://1.2.3.4:21/path",
            "ftps://files.example.net",
            "http://localhost:8080/",
            "https://sub-domain.example.co/course.html#top",
        ] {
            assert!(is_valid_url(url), "{}", url);
        }
    }

    #[test]
    fn test_rejects() {
        for url in [
            "not a url",
            "http://",
            "www.example.com",
            "mailto:someone@example.com",
            "https://example",
            "https://-bad.example.com",
            "https://example.com/with space",
            "",
        ] {
            assert!(!is_valid_url(url), "{}", url);
        }
    }
}
