// Session cookie carrying the JWT for browser clients

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "auth_token";

/// Builds the session cookie for a freshly issued token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to remove the session on logout
///
/// Path must match the one set at login or the browser keeps the session cookie.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn clear_cookie_matches_path() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
    }
}
