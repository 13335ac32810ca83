use crate::domain::outbound::TokenPort;

/// Cookie the platform backend stores its anti-forgery token in.
const DEFAULT_COOKIE_NAME: &str = "csrftoken";

/// A [`TokenPort`] adapter extracting the token from a `"; "`-separated
/// cookie string.
pub struct CookieTokenSource {
    cookies: String,
    name: String,
}

impl CookieTokenSource {
    /// Creates a new [`CookieTokenSource`] looking up the default token
    /// cookie.
    pub fn new(cookies: String) -> Self {
        Self::with_name(cookies, DEFAULT_COOKIE_NAME.to_owned())
    }

    /// Creates a new [`CookieTokenSource`] looking up a custom cookie name.
    pub fn with_name(cookies: String, name: String) -> Self {
        Self { cookies, name }
    }
}

impl TokenPort for CookieTokenSource {
    fn token(&self) -> Option<String> {
        self.cookies.split("; ").find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == self.name).then(|| value.to_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_found_among_cookies() {
        let source =
            CookieTokenSource::new("sessionid=abc123; csrftoken=secret; theme=dark".into());
        assert_eq!(source.token(), Some("secret".into()));
    }

    #[test]
    fn token_missing() {
        let source = CookieTokenSource::new("sessionid=abc123; theme=dark".into());
        assert_eq!(source.token(), None);
    }

    #[test]
    fn token_from_empty_cookie_string() {
        let source = CookieTokenSource::new(String::new());
        assert_eq!(source.token(), None);
    }

    #[test]
    fn token_with_custom_name() {
        let source = CookieTokenSource::with_name("xsrf=tok".into(), "xsrf".into());
        assert_eq!(source.token(), Some("tok".into()));
    }

    #[test]
    fn token_name_must_match_exactly() {
        let source = CookieTokenSource::new("notcsrftoken=tok".into());
        assert_eq!(source.token(), None);
    }
}
