//! Cookie name extraction and the expiring overwrites used to delete them.
//!
//! The attributes a cookie was set with are not readable back from the
//! document, and a deletion only lands when domain and path match exactly.
//! Each name therefore gets one overwrite per common scope.

/// An expiry date in the past; browsers drop a cookie written with it.
pub const EXPIRED_AT: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieScope {
    /// `path=/` with no domain, matching host-only cookies.
    PathOnly,
    /// `domain=<host>`.
    Host,
    /// `domain=.<host>`, the legacy wildcard-subdomain form.
    Subdomains,
}

impl CookieScope {
    pub const ALL: [CookieScope; 3] = [
        CookieScope::PathOnly,
        CookieScope::Host,
        CookieScope::Subdomains,
    ];
}

/// Names of the cookies in a `document.cookie` style header.
pub fn cookie_names(header: &str) -> Vec<String> {
    header
        .split(';')
        .map(|entry| match entry.split_once('=') {
            Some((name, _)) => name.trim(),
            None => entry.trim(),
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn expiring_overwrite(name: &str, scope: CookieScope, host: &str) -> String {
    match scope {
        CookieScope::PathOnly => format!("{}=;expires={};path=/", name, EXPIRED_AT),
        CookieScope::Host => format!("{}=;expires={};path=/;domain={}", name, EXPIRED_AT, host),
        CookieScope::Subdomains => {
            format!("{}=;expires={};path=/;domain=.{}", name, EXPIRED_AT, host)
        }
    }
}

pub fn expiring_overwrites(name: &str, host: &str) -> [String; 3] {
    CookieScope::ALL.map(|scope| expiring_overwrite(name, scope, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_names_basic() {
        let names = cookie_names("sid=abc123; theme=dark; lang=en");
        assert_eq!(names, vec!["sid", "theme", "lang"]);
    }

    #[test]
    fn test_cookie_names_value_with_equals() {
        let names = cookie_names("token=a=b=c; flag");
        assert_eq!(names, vec!["token", "flag"]);
    }

    #[test]
    fn test_cookie_names_empty_header() {
        assert!(cookie_names("").is_empty());
        assert!(cookie_names(" ; ;").is_empty());
    }

    #[test]
    fn test_cookie_names_trims_whitespace() {
        let names = cookie_names("  spaced  =1;\tother=2 ");
        assert_eq!(names, vec!["spaced", "other"]);
    }

    #[test]
    fn test_expiring_overwrites() {
        let [path_only, host, subdomains] = expiring_overwrites("sid", "swasthya360.in");
        assert_eq!(
            path_only,
            "sid=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"
        );
        assert_eq!(
            host,
            "sid=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;domain=swasthya360.in"
        );
        assert_eq!(
            subdomains,
            "sid=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;domain=.swasthya360.in"
        );
    }
}
