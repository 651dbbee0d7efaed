//! Session cookie parsing and `Set-Cookie` rendering

use axum::http::{header::InvalidHeaderValue, HeaderMap, HeaderValue};
use axum_extra::extract::cookie::{self, Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

use localauth_shared::config::{SameSite, SessionSettings};

/// Value of the cookie called `name` across all `Cookie` headers.
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(name)
        .map(|cookie| cookie.value().to_string())
}

pub fn session_cookie(
    settings: &SessionSettings,
    signed_id: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = Duration::seconds(i64::try_from(settings.cookie_max_age_secs).unwrap_or(i64::MAX));

    let mut cookie = Cookie::build((settings.cookie_name.clone(), signed_id.to_string()))
        .path(settings.cookie_path.clone())
        .max_age(max_age)
        .http_only(settings.cookie_http_only)
        .secure(settings.cookie_secure)
        .same_site(same_site(settings.cookie_same_site));
    if let Some(expires) = OffsetDateTime::now_utc().checked_add(max_age) {
        cookie = cookie.expires(expires);
    }

    HeaderValue::from_str(&cookie.build().to_string())
}

fn same_site(value: SameSite) -> cookie::SameSite {
    match value {
        SameSite::Strict => cookie::SameSite::Strict,
        SameSite::Lax => cookie::SameSite::Lax,
        SameSite::None => cookie::SameSite::None,
    }
}
