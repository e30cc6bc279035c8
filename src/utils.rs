use axum::http::header::{HeaderValue, InvalidHeaderValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { " Secure;" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; HttpOnly; Max-Age=3600;{secure} Path=/; SameSite=Strict"
    ))
}

pub fn clear_cookie(name: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { " Secure;" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}=; HttpOnly; Max-Age=0;{secure} Path=/; SameSite=Strict"
    ))
}
