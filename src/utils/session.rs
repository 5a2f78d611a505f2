use http::{HeaderMap, header::COOKIE};

pub const SESSION_COOKIE: &str = "admin_session";

/// Value of the admin session cookie, if the request carries one.
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
        })
}

pub fn set_session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn clear_session_cookie(secure: bool) -> String {
    set_session_cookie("", 0, secure)
}

/// Compares without short-circuiting on the first differing byte.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Post-login target. Only paths inside the admin area are honoured.
pub fn safe_redirect(redirect: Option<&str>) -> String {
    match redirect {
        Some(path)
            if (path == "/admin" || path.starts_with("/admin/"))
                && path != "/admin/login"
                && !path.starts_with("/admin/login/") =>
        {
            path.to_string()
        }
        _ => "/admin".to_string(),
    }
}

/// `/admin/login` URL carrying `path` for the post-login return.
pub fn login_redirect(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '&' => encoded.push_str("%26"),
            '=' => encoded.push_str("%3D"),
            '+' => encoded.push_str("%2B"),
            '#' => encoded.push_str("%23"),
            _ => encoded.push(c),
        }
    }
    format!("/admin/login?redirect={}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn finds_session_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc.def; lang=tr"),
        );

        assert_eq!(session_cookie(&headers), Some("abc.def"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("admin_session="));
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn secure_flag_follows_environment() {
        assert!(set_session_cookie("t", 60, true).ends_with("; Secure"));
        assert!(!set_session_cookie("t", 60, false).contains("Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"admin", b"admin"));
        assert!(!constant_time_eq(b"admin", b"admim"));
        assert!(!constant_time_eq(b"admin", b"admin1"));
    }

    #[test]
    fn redirect_outside_admin_falls_back() {
        assert_eq!(safe_redirect(None), "/admin");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/admin");
        assert_eq!(safe_redirect(Some("/administrator")), "/admin");
        assert_eq!(safe_redirect(Some("/admin/login")), "/admin");
        assert_eq!(safe_redirect(Some("/admin/settings")), "/admin/settings");
    }

    #[test]
    fn login_redirect_keeps_plain_paths_readable() {
        assert_eq!(login_redirect("/admin"), "/admin/login?redirect=/admin");
        assert_eq!(
            login_redirect("/admin/a&b"),
            "/admin/login?redirect=/admin/a%26b"
        );
    }
}
