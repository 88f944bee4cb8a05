//! The user store the header signs out of.
//!
//! The store is owned by the host application. It holds a JSON state bag and
//! may offer its own `reset` or `clear` lifecycle hooks. Which of these a
//! sign-out uses is decided once, when the store is built, so the teardown
//! only ever sees [`SessionStore::clear_to_default`].

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub type StateBag = Map<String, Value>;

pub type StoreHook = Box<dyn Fn(&mut StateBag) + Send + Sync>;

/// Anything sign-out can return to its signed-out default.
pub trait SessionStore {
    fn clear_to_default(&mut self);
}

/// The signed-out state: exactly `user`, `token`, `isAuthenticated` and
/// `profile`, nothing else.
pub fn signed_out_state() -> StateBag {
    let mut state = StateBag::new();
    state.insert("user".to_string(), Value::Null);
    state.insert("token".to_string(), Value::Null);
    state.insert("isAuthenticated".to_string(), Value::Bool(false));
    state.insert("profile".to_string(), Value::Null);
    state
}

enum Lifecycle {
    Reset(StoreHook),
    Clear(StoreHook),
    ReplaceState,
}

pub struct UserStore {
    state: StateBag,
    lifecycle: Lifecycle,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lifecycle = match self.lifecycle {
            Lifecycle::Reset(_) => "reset",
            Lifecycle::Clear(_) => "clear",
            Lifecycle::ReplaceState => "replace",
        };
        f.debug_struct("UserStore")
            .field("state", &self.state)
            .field("lifecycle", &lifecycle)
            .finish()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            state: signed_out_state(),
            lifecycle: Lifecycle::ReplaceState,
        }
    }

    /// Uses `hook` to clear the store on sign-out. Takes precedence over a
    /// `clear` hook.
    pub fn with_reset(mut self, hook: impl Fn(&mut StateBag) + Send + Sync + 'static) -> Self {
        self.lifecycle = Lifecycle::Reset(Box::new(hook));
        self
    }

    /// Uses `hook` to clear the store on sign-out unless a `reset` hook is
    /// already installed.
    pub fn with_clear(mut self, hook: impl Fn(&mut StateBag) + Send + Sync + 'static) -> Self {
        if !matches!(self.lifecycle, Lifecycle::Reset(_)) {
            self.lifecycle = Lifecycle::Clear(Box::new(hook));
        }
        self
    }

    pub fn state(&self) -> &StateBag {
        &self.state
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    /// Merges `partial` into the state, or replaces the state with it when
    /// `replace` is set.
    pub fn set_state(&mut self, partial: Value, replace: bool) -> Result<()> {
        let partial = match partial {
            Value::Object(map) => map,
            other => return Err(Error::StateNotObject(json_type(&other))),
        };
        if replace {
            self.state = partial;
        } else {
            self.state.extend(partial);
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .get("isAuthenticated")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl SessionStore for UserStore {
    fn clear_to_default(&mut self) {
        match &self.lifecycle {
            Lifecycle::Reset(hook) | Lifecycle::Clear(hook) => hook(&mut self.state),
            Lifecycle::ReplaceState => self.state = signed_out_state(),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reactive handle to the app-wide [`UserStore`], shared through Leptos
/// context.
#[derive(Clone, Copy)]
pub struct UserStoreContext(pub RwSignal<UserStore>);

impl UserStoreContext {
    pub fn provide(store: UserStore) -> Self {
        let context = Self(RwSignal::new(store));
        provide_context(context);
        context
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(UserStore::is_authenticated)
    }
}

impl SessionStore for UserStoreContext {
    fn clear_to_default(&mut self) {
        self.0.update(|store| store.clear_to_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_store_is_signed_out() {
        let store = UserStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.state(), &signed_out_state());
    }

    #[test]
    fn test_set_state_merges_and_replaces() {
        let mut store = UserStore::new();
        store
            .set_state(json!({"token": "abc", "isAuthenticated": true}), false)
            .unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.get("token"), Some(&json!("abc")));
        assert_eq!(store.get("user"), Some(&Value::Null));

        store.set_state(json!({"theme": "dark"}), true).unwrap();
        assert_eq!(store.state().len(), 1);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_state_rejects_non_objects() {
        let mut store = UserStore::new();
        let err = store.set_state(json!([1, 2]), false).unwrap_err();
        assert!(matches!(err, Error::StateNotObject("array")));
    }

    #[test]
    fn test_fallback_replaces_whole_state() {
        let mut store = UserStore::new();
        store
            .set_state(
                json!({
                    "user": {"name": "Asha"},
                    "token": "abc",
                    "isAuthenticated": true,
                    "profile": {"age": 31},
                    "preferredLanguage": "hi",
                }),
                true,
            )
            .unwrap();

        store.clear_to_default();

        assert_eq!(
            Value::Object(store.state().clone()),
            json!({
                "user": null,
                "token": null,
                "isAuthenticated": false,
                "profile": null,
            })
        );
        assert!(store.get("preferredLanguage").is_none());
    }

    #[test]
    fn test_reset_hook_wins_over_clear() {
        let mut store = UserStore::new()
            .with_clear(|state| {
                state.insert("cleared_by".to_string(), json!("clear"));
            })
            .with_reset(|state| {
                state.insert("cleared_by".to_string(), json!("reset"));
            });
        store.clear_to_default();
        assert_eq!(store.get("cleared_by"), Some(&json!("reset")));

        // Installing clear after reset does not demote it.
        let mut store = UserStore::new()
            .with_reset(|state| {
                state.insert("cleared_by".to_string(), json!("reset"));
            })
            .with_clear(|state| {
                state.insert("cleared_by".to_string(), json!("clear"));
            });
        store.clear_to_default();
        assert_eq!(store.get("cleared_by"), Some(&json!("reset")));
    }

    #[test]
    fn test_clear_hook_used_without_reset() {
        let mut store = UserStore::new().with_clear(|state| {
            state.clear();
        });
        store
            .set_state(json!({"isAuthenticated": true, "extra": 1}), false)
            .unwrap();

        store.clear_to_default();

        assert!(store.state().is_empty());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_debug_names_lifecycle() {
        let store = UserStore::new().with_clear(|_| {});
        assert!(format!("{:?}", store).contains("\"clear\""));
    }
}
