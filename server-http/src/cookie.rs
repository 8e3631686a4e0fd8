use axum::http::{header, HeaderMap};

/// Name of the session cookie the browser carries
pub const SESSION_COOKIE_NAME: &str = "shelfmark_session";

/// Build the Set-Cookie value that hands the session token to the client.
/// HttpOnly keeps it away from page scripts; the client only ever holds
/// the opaque token, never session contents.
pub fn create_session_cookie(token: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE_NAME, token, max_age_secs
    )
}

/// Build the Set-Cookie value that removes the session cookie
pub fn create_logout_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE_NAME
    )
}

/// Extract the session token from a request's Cookie header
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE_NAME && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token() {
        let headers = headers_with_cookie("shelfmark_session=abc123");
        assert_eq!(session_token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_extract_token_among_other_cookies() {
        let headers =
            headers_with_cookie("theme=dark; shelfmark_session=abc123; lang=zh-TW");
        assert_eq!(session_token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert!(session_token_from_headers(&HeaderMap::new()).is_none());

        let headers = headers_with_cookie("theme=dark");
        assert!(session_token_from_headers(&headers).is_none());

        let headers = headers_with_cookie("shelfmark_session=");
        assert!(session_token_from_headers(&headers).is_none());
    }

    #[test]
    fn test_cookie_round_trip() {
        let cookie = create_session_cookie("abc123", 3600);
        assert!(cookie.starts_with("shelfmark_session=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=3600"));

        let cleared = create_logout_cookie();
        assert!(cleared.contains("Max-Age=0"));
    }
}
