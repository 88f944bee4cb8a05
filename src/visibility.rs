use serde::{Deserialize, Serialize};

/// Routes where the user is signing in or up; the header is stripped down.
pub const AUTH_ENTRY_ROUTES: [&str; 2] = ["/signup", "/signin"];

/// Routes that require a session. The header always offers Sign Out here.
pub const PROTECTED_ROUTES: [&str; 6] = [
    "/landing",
    "/check-symptoms",
    "/user-details",
    "/health-chatbot",
    "/vaccination-info",
    "/disease-outbreaks",
];

/// Which header affordances a route allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVisibilityFlags {
    pub show_emergency: bool,
    pub show_nav_menu: bool,
    pub show_auth_buttons: bool,
    pub force_sign_out: bool,
}

impl RouteVisibilityFlags {
    pub const DEFAULT: Self = Self {
        show_emergency: true,
        show_nav_menu: true,
        show_auth_buttons: true,
        force_sign_out: false,
    };

    const AUTH_ENTRY: Self = Self {
        show_emergency: false,
        show_nav_menu: false,
        show_auth_buttons: false,
        force_sign_out: false,
    };

    const PROTECTED: Self = Self {
        force_sign_out: true,
        ..Self::DEFAULT
    };
}

impl Default for RouteVisibilityFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

struct VisibilityRule {
    routes: &'static [&'static str],
    flags: RouteVisibilityFlags,
}

// Checked in order, first match wins.
const RULES: [VisibilityRule; 2] = [
    VisibilityRule {
        routes: &AUTH_ENTRY_ROUTES,
        flags: RouteVisibilityFlags::AUTH_ENTRY,
    },
    VisibilityRule {
        routes: &PROTECTED_ROUTES,
        flags: RouteVisibilityFlags::PROTECTED,
    },
];

/// Maps the current pathname to the header flags. Matching is exact, so
/// `/landing/` is an ordinary route. The authentication flag never changes
/// the flags themselves; it only matters when they are composed into
/// [`HeaderControls`].
pub fn evaluate(current_route: &str, _is_authenticated: bool) -> RouteVisibilityFlags {
    RULES
        .iter()
        .find(|rule| rule.routes.iter().any(|route| *route == current_route))
        .map(|rule| rule.flags)
        .unwrap_or_default()
}

/// The authentication control group on the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthControls {
    SignOut,
    SignInSignUp,
    Hidden,
}

/// Everything the header renders, resolved from the route and auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderControls {
    pub show_menu_button: bool,
    pub show_nav_menu: bool,
    pub show_emergency: bool,
    pub auth: AuthControls,
}

impl HeaderControls {
    pub fn resolve(current_route: &str, is_authenticated: bool) -> Self {
        Self::compose(evaluate(current_route, is_authenticated), is_authenticated)
    }

    pub fn compose(flags: RouteVisibilityFlags, is_authenticated: bool) -> Self {
        let auth = if flags.force_sign_out || is_authenticated {
            AuthControls::SignOut
        } else if flags.show_auth_buttons {
            AuthControls::SignInSignUp
        } else {
            AuthControls::Hidden
        };

        Self {
            show_menu_button: is_authenticated,
            show_nav_menu: flags.show_nav_menu,
            show_emergency: flags.show_emergency,
            auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_entry_routes_hide_everything() {
        for route in AUTH_ENTRY_ROUTES {
            for authenticated in [false, true] {
                let flags = evaluate(route, authenticated);
                assert_eq!(
                    flags,
                    RouteVisibilityFlags {
                        show_emergency: false,
                        show_nav_menu: false,
                        show_auth_buttons: false,
                        force_sign_out: false,
                    },
                    "Failed for {}",
                    route
                );
            }
        }
    }

    #[test]
    fn test_protected_routes_force_sign_out() {
        for route in PROTECTED_ROUTES {
            let flags = evaluate(route, false);
            assert!(flags.force_sign_out, "Failed for {}", route);
            assert!(flags.show_emergency);
            assert!(flags.show_nav_menu);
            assert!(flags.show_auth_buttons);
        }
    }

    #[test]
    fn test_unknown_routes_use_defaults() {
        for route in ["/", "/about", "", "/landing/", "/SIGNIN", "/signin?next=/landing"] {
            assert_eq!(
                evaluate(route, false),
                RouteVisibilityFlags::DEFAULT,
                "Failed for {}",
                route
            );
        }
    }

    #[test]
    fn test_flags_serialize_camel_case() {
        let json = serde_json::to_value(RouteVisibilityFlags::DEFAULT).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "showEmergency": true,
                "showNavMenu": true,
                "showAuthButtons": true,
                "forceSignOut": false,
            })
        );
    }

    #[test]
    fn test_signin_page_controls() {
        let controls = HeaderControls::resolve("/signin", false);
        assert!(!controls.show_emergency);
        assert!(!controls.show_nav_menu);
        assert!(!controls.show_menu_button);
        assert_eq!(controls.auth, AuthControls::Hidden);
    }

    #[test]
    fn test_protected_page_shows_sign_out_when_signed_out() {
        let controls = HeaderControls::resolve("/landing", false);
        assert_eq!(controls.auth, AuthControls::SignOut);
        assert!(controls.show_emergency);
        assert!(controls.show_nav_menu);
        assert!(!controls.show_menu_button);
    }

    #[test]
    fn test_public_page_controls() {
        let signed_out = HeaderControls::resolve("/about", false);
        assert_eq!(signed_out.auth, AuthControls::SignInSignUp);
        assert!(!signed_out.show_menu_button);

        let signed_in = HeaderControls::resolve("/about", true);
        assert_eq!(signed_in.auth, AuthControls::SignOut);
        assert!(signed_in.show_menu_button);
    }

    #[test]
    fn test_authenticated_on_auth_entry_route_still_signs_out() {
        let controls = HeaderControls::resolve("/signup", true);
        assert_eq!(controls.auth, AuthControls::SignOut);
        assert!(controls.show_menu_button);
        assert!(!controls.show_nav_menu);
        assert!(!controls.show_emergency);
    }
}
