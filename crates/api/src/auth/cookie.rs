pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

fn cookie_attributes(max_age_secs: u64, cookie_domain: &Option<String>, secure: bool) -> String {
    let mut attrs = String::from("; HttpOnly");
    if secure {
        attrs.push_str("; Secure; SameSite=Strict");
    } else {
        attrs.push_str("; SameSite=Lax");
    }
    attrs.push_str(&format!("; Path=/auth; Max-Age={}", max_age_secs));

    if let Some(domain) = cookie_domain {
        attrs.push_str(&format!("; Domain={}", domain));
    }

    attrs
}

pub fn build_refresh_cookie(
    raw_token: &str,
    max_age_secs: u64,
    cookie_domain: &Option<String>,
    secure: bool,
) -> String {
    format!(
        "{}={}{}",
        REFRESH_COOKIE_NAME,
        raw_token,
        cookie_attributes(max_age_secs, cookie_domain, secure)
    )
}

pub fn build_clear_cookie(cookie_domain: &Option<String>, secure: bool) -> String {
    format!(
        "{}={}",
        REFRESH_COOKIE_NAME,
        cookie_attributes(0, cookie_domain, secure)
    )
}

/// Pull the refresh token out of a raw `Cookie` header.
pub fn extract_refresh_token(cookie_header: &str) -> Option<String> {
    cookie_header.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        let value = value.trim();
        (name == REFRESH_COOKIE_NAME && !value.is_empty()).then(|| value.to_string())
    })
}
