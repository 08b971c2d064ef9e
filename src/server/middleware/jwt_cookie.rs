//! Lets browser clients authenticate with the `access_token` cookie.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Copies the `access_token` cookie into an `Authorization: Bearer` header.
///
/// Requests that already carry an `Authorization` header are left untouched.
pub async fn cookie_to_bearer(mut request: Request, next: Next) -> Response {
    if !request.headers().contains_key(header::AUTHORIZATION) {
        let token = request
            .headers()
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|cookies| find_cookie(cookies, ACCESS_TOKEN_COOKIE))
            .map(str::to_string);

        if let Some(token) = token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                request.headers_mut().insert(header::AUTHORIZATION, value);
            }
        }
    }

    next.run(request).await
}

/// `Set-Cookie` value storing an access token for `max_age_seconds`.
pub fn access_token_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ACCESS_TOKEN_COOKIE, token, max_age_seconds
    )
}

/// `Set-Cookie` value that removes the access token cookie.
pub fn clear_access_token_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        ACCESS_TOKEN_COOKIE
    )
}

fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}
