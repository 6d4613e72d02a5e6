//! Double-submit CSRF protection.
//!
//! Mints a random token per browser session, hands it to the entry view
//! through request extensions, and sets it as a cookie. State-changing
//! requests must echo the cookie value in the X-CSRF-Token header.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::errors::AppError;

/// Header clients send the token back in.
pub static CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");

/// Cookie the token is stored under.
pub const CSRF_COOKIE: &str = "csrf_token";

/// The session's CSRF token, available to handlers as a request extension.
#[derive(Debug, Clone)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn value(&self) -> &str {
        &self.0
    }
}

fn mint_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Tokens are 32 lowercase hex chars; anything else in the cookie is treated
/// as absent and replaced.
fn is_well_formed(token: &str) -> bool {
    token.len() == 32 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

fn cookie_token(request: &Request) -> Option<String> {
    let raw = request.headers().get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == CSRF_COOKIE && is_well_formed(value)).then(|| value.to_string())
    })
}

/// Safe methods pass through; everything else requires the double-submit
/// token.
fn requires_token(method: &Method) -> bool {
    !matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

pub async fn csrf_middleware(mut request: Request, next: Next) -> Response<Body> {
    let (token, minted) = match cookie_token(&request) {
        Some(token) => (token, false),
        None => (mint_token(), true),
    };

    if requires_token(request.method()) {
        let presented = request
            .headers()
            .get(&CSRF_HEADER)
            .and_then(|v| v.to_str().ok());

        if minted || presented != Some(token.as_str()) {
            return AppError::CsrfMismatch.into_response();
        }
    }

    request.extensions_mut().insert(CsrfToken(token.clone()));

    let mut response = next.run(request).await;

    if minted {
        let cookie = format!("{CSRF_COOKIE}={token}; Path=/; SameSite=Strict");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}
