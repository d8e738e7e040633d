// crates/server/src/session.rs
//! Browser session identity: an opaque random id carried in a cookie.
//!
//! Possession of the cookie value is the whole of authentication. Cookies
//! carry no expiry and are not signed.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const SESSION_COOKIE: &str = "session_id";

/// Mint a new 32-hex-character session id.
pub fn new_session_id() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

/// Session id from the request cookies, if present and non-empty.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Session cookie for `id`, valid for the whole site.
pub fn session_cookie(id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .build()
}
