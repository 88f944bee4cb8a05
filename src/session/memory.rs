//! In-memory environment for hosts without a browser and for tests.
//!
//! The cookie jar follows browser deletion rules closely enough to show
//! which overwrites actually land: a cookie is only removed by a write with
//! the same name, path and domain (a leading `.` on the domain is ignored,
//! no domain means host-only).

use std::collections::BTreeMap;

use super::cookies::EXPIRED_AT;
use super::{CookieJar, KeyValueStore, Navigator};

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredCookie {
    name: String,
    value: String,
    /// `None` for host-only cookies.
    domain: Option<String>,
    path: String,
}

impl StoredCookie {
    fn same_slot(&self, other: &StoredCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }
}

struct ParsedWrite {
    cookie: StoredCookie,
    expired: bool,
}

fn parse_write(cookie: &str) -> Option<ParsedWrite> {
    let mut parts = cookie.split(';');
    let (name, value) = parts.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut domain = None;
    let mut path = "/".to_string();
    let mut expired = false;
    for attribute in parts {
        let (key, val) = match attribute.split_once('=') {
            Some((key, val)) => (key.trim(), val.trim()),
            None => (attribute.trim(), ""),
        };
        match key.to_ascii_lowercase().as_str() {
            "domain" => {
                let normalized = val.trim_start_matches('.').to_ascii_lowercase();
                if !normalized.is_empty() {
                    domain = Some(normalized);
                }
            }
            "path" if !val.is_empty() => path = val.to_string(),
            "expires" => expired = val.eq_ignore_ascii_case(EXPIRED_AT),
            "max-age" => expired = val.parse::<i64>().map(|age| age <= 0).unwrap_or(false),
            _ => {}
        }
    }

    Some(ParsedWrite {
        cookie: StoredCookie {
            name: name.to_string(),
            value: value.trim().to_string(),
            domain,
            path,
        },
        expired,
    })
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    host: String,
    cookies: Vec<StoredCookie>,
}

impl MemoryCookieJar {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            cookies: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    fn accepts_domain(&self, domain: &str) -> bool {
        let host = self.host.to_ascii_lowercase();
        host == domain || host.ends_with(&format!(".{}", domain))
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&mut self, cookie: &str) {
        let Some(parsed) = parse_write(cookie) else {
            return;
        };
        // Browsers silently ignore cookies for a foreign domain.
        if let Some(domain) = &parsed.cookie.domain {
            if !self.accepts_domain(domain) {
                return;
            }
        }

        let existing = self
            .cookies
            .iter()
            .position(|stored| stored.same_slot(&parsed.cookie));
        match (existing, parsed.expired) {
            (Some(index), true) => {
                self.cookies.remove(index);
            }
            (Some(index), false) => self.cookies[index] = parsed.cookie,
            (None, false) => self.cookies.push(parsed.cookie),
            (None, true) => {}
        }
    }
}

/// Web Storage stand-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    pub fn set_item(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Records navigations instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    hostname: String,
    visited: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            visited: Vec::new(),
        }
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for MemoryNavigator {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn navigate(&mut self, location: &str) {
        self.visited.push(location.to_string());
    }
}
