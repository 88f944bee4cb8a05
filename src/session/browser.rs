//! The real browser environment, over `web-sys`.
//!
//! Any capability that cannot be acquired is logged once and then behaves as
//! a no-op, so a sign-out in a locked-down browser still clears whatever it
//! can and still redirects.

use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Storage, Window};

use super::{CookieJar, Environment, KeyValueStore, Navigator, StorageKind};
use crate::error::{Error, Result};

fn js_error(operation: &'static str, value: JsValue) -> Error {
    Error::Js {
        operation,
        message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}

fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::WindowUnavailable)
}

fn html_document(window: &Window) -> Result<HtmlDocument> {
    window
        .document()
        .ok_or(Error::DocumentUnavailable)?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| Error::DocumentUnavailable)
}

fn web_storage(window: &Window, kind: StorageKind) -> Result<Storage> {
    let storage = match kind {
        StorageKind::Local => window.local_storage(),
        StorageKind::Session => window.session_storage(),
    };
    storage
        .map_err(|e| js_error("window.storage", e))?
        .ok_or(Error::StorageUnavailable(kind))
}

fn acquired<T>(result: Result<T>) -> Option<T> {
    result.map_err(|e| warn!("Browser capability unavailable: {}", e)).ok()
}

pub struct DocumentCookieJar {
    document: Option<HtmlDocument>,
}

impl CookieJar for DocumentCookieJar {
    fn cookie_header(&self) -> String {
        let Some(document) = &self.document else {
            return String::new();
        };
        document
            .cookie()
            .map_err(|e| warn!("{}", js_error("document.cookie", e)))
            .unwrap_or_default()
    }

    fn write(&mut self, cookie: &str) {
        if let Some(document) = &self.document {
            if let Err(e) = document.set_cookie(cookie) {
                warn!("{}", js_error("document.cookie=", e));
            }
        }
    }
}

pub struct WebStorage {
    kind: StorageKind,
    storage: Option<Storage>,
}

impl KeyValueStore for WebStorage {
    fn clear(&mut self) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.clear() {
                warn!("Failed to clear {} storage: {}", self.kind, js_error("Storage.clear", e));
            }
        }
    }
}

pub struct WindowNavigator {
    window: Option<Window>,
}

impl Navigator for WindowNavigator {
    fn hostname(&self) -> String {
        self.window
            .as_ref()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default()
    }

    fn navigate(&mut self, location: &str) {
        if let Some(window) = &self.window {
            if let Err(e) = window.location().set_href(location) {
                warn!("{}", js_error("location.href=", e));
            }
        }
    }
}

/// The current page's cookies, storages and location.
pub struct BrowserEnvironment {
    cookies: DocumentCookieJar,
    local_storage: WebStorage,
    session_storage: WebStorage,
    navigator: WindowNavigator,
}

impl BrowserEnvironment {
    pub fn current() -> Self {
        let window = acquired(window());
        let document = window.as_ref().and_then(|w| acquired(html_document(w)));
        let storage = |kind| window.as_ref().and_then(|w| acquired(web_storage(w, kind)));

        Self {
            cookies: DocumentCookieJar { document },
            local_storage: WebStorage {
                kind: StorageKind::Local,
                storage: storage(StorageKind::Local),
            },
            session_storage: WebStorage {
                kind: StorageKind::Session,
                storage: storage(StorageKind::Session),
            },
            navigator: WindowNavigator { window },
        }
    }

    pub fn environment(&mut self) -> Environment<'_> {
        Environment {
            cookies: &mut self.cookies,
            local_storage: &mut self.local_storage,
            session_storage: &mut self.session_storage,
            navigator: &mut self.navigator,
        }
    }
}
