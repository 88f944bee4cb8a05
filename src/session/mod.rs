//! Client-side session teardown.
//!
//! [`sign_out`] clears every session artifact the browser holds for the
//! portal and sends the user home. The browser globals it touches are passed
//! in as an [`Environment`] so the sequence runs the same against the real
//! document ([`browser`]) and against in-memory stand-ins ([`memory`]).

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod cookies;
pub mod memory;

use std::fmt;

use tracing::{debug, info};

use crate::store::SessionStore;

/// Where the browser is sent once the session is gone.
pub const HOME_LOCATION: &str = "/";

/// Read and write access to the cookies visible to the current document.
pub trait CookieJar {
    /// The `name=value; name=value` header, as `document.cookie` returns it.
    fn cookie_header(&self) -> String;

    /// Writes a single cookie string, attributes included.
    fn write(&mut self, cookie: &str);
}

/// A Web Storage area. Sign-out only ever wipes it whole.
pub trait KeyValueStore {
    fn clear(&mut self);
}

pub trait Navigator {
    /// Hostname of the current location, without port.
    fn hostname(&self) -> String;

    fn navigate(&mut self, location: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Local => f.write_str("local"),
            StorageKind::Session => f.write_str("session"),
        }
    }
}

/// The browser capabilities sign-out needs.
pub struct Environment<'a> {
    pub cookies: &'a mut dyn CookieJar,
    pub local_storage: &'a mut dyn KeyValueStore,
    pub session_storage: &'a mut dyn KeyValueStore,
    pub navigator: &'a mut dyn Navigator,
}

/// What a sign-out run touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub cookies_expired: Vec<String>,
    pub store_cleared: bool,
    pub callback_invoked: bool,
}

/// Clears cookies, both web storages and the user store, notifies
/// `on_complete`, then navigates to [`HOME_LOCATION`].
///
/// Every step is attempted exactly once and nothing is reported as a
/// failure: a missing store or callback just skips that step. Running it on
/// an already cleared environment leaves it unchanged apart from the
/// redirect.
pub fn sign_out(
    env: &mut Environment<'_>,
    store: Option<&mut dyn SessionStore>,
    on_complete: Option<&dyn Fn()>,
) -> TeardownReport {
    let mut report = TeardownReport::default();

    let host = env.navigator.hostname();
    for name in cookies::cookie_names(&env.cookies.cookie_header()) {
        for overwrite in cookies::expiring_overwrites(&name, &host) {
            env.cookies.write(&overwrite);
        }
        report.cookies_expired.push(name);
    }
    debug!(
        "Expired {} cookie(s) for host `{}`",
        report.cookies_expired.len(),
        host
    );

    env.local_storage.clear();
    env.session_storage.clear();
    debug!("Cleared local and session storage");

    if let Some(store) = store {
        store.clear_to_default();
        report.store_cleared = true;
        debug!("Reset user store");
    }

    if let Some(on_complete) = on_complete {
        on_complete();
        report.callback_invoked = true;
    }

    info!("Signed out, redirecting to `{}`", HOME_LOCATION);
    env.navigator.navigate(HOME_LOCATION);

    report
}
