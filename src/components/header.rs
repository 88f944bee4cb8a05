use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::components::emergency::EmergencyButton;
use crate::store::UserStoreContext;
use crate::visibility::{AuthControls, HeaderControls};

/// In-page sections of the home page linked from the centre navigation.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#services", "Services"),
    ("#aboutus", "About Us"),
    ("#contactus", "Contact Us"),
];

/// Site header. What it shows follows the current route and
/// `is_authenticated` (see [`HeaderControls`]); the optional callbacks fire
/// when their control is clicked. Sign Out also tears the session down and
/// redirects home, calling `on_sign_out_click` just before the redirect.
#[component]
pub fn Header(
    #[prop(into)] is_authenticated: Signal<bool>,
    #[prop(optional)] on_menu_click: Option<Callback<()>>,
    #[prop(optional)] on_sign_up_click: Option<Callback<()>>,
    #[prop(optional)] on_sign_in_click: Option<Callback<()>>,
    #[prop(optional)] on_sign_out_click: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();
    let controls = Memo::new(move |_| {
        location
            .pathname
            .with(|path| HeaderControls::resolve(path, is_authenticated.get()))
    });
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let (user_store, on_sign_out) = (use_context::<UserStoreContext>(), on_sign_out_click);

    let handle_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::session::{browser::BrowserEnvironment, sign_out};
            use crate::store::SessionStore;

            let mut browser = BrowserEnvironment::current();
            let mut store = user_store;
            let notify = on_sign_out.map(|callback| move || callback.run(()));
            sign_out(
                &mut browser.environment(),
                store.as_mut().map(|store| store as &mut dyn SessionStore),
                notify.as_ref().map(|notify| notify as &dyn Fn()),
            );
        }
    };

    let handle_sign_in = move |_| {
        if let Some(callback) = on_sign_in_click {
            callback.run(());
        }
    };

    let handle_sign_up = move |_| {
        if let Some(callback) = on_sign_up_click {
            callback.run(());
        }
    };

    view! {
        <header class="app-header">
            <div class="header-content">
                <Show when=move || controls.get().show_menu_button>
                    <button
                        class="menu-button"
                        type="button"
                        aria-label="Open menu"
                        on:click=move |_| {
                            if let Some(callback) = on_menu_click {
                                callback.run(());
                            }
                        }
                    >
                        "☰"
                    </button>
                </Show>

                <A href="/" attr:class="brand">
                    <img src="/Swasthya360.png" alt="Swasthya360 Logo" class="brand-logo"/>
                    <h1 class="app-title">"Swasthya360"</h1>
                </A>

                <Show when=move || controls.get().show_nav_menu>
                    <nav class="header-nav">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a href=*href class="nav-link">
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>

                <div class="header-actions">
                    <Show when=move || controls.get().show_emergency>
                        <EmergencyButton/>
                    </Show>

                    {move || match controls.get().auth {
                        AuthControls::SignOut => view! {
                            <button class="header-button sign-out" type="button" on:click=handle_sign_out>
                                "Sign Out"
                            </button>
                        }
                        .into_any(),
                        AuthControls::SignInSignUp => view! {
                            <div class="auth-buttons">
                                <button class="header-button sign-in" type="button" on:click=handle_sign_in>
                                    "Sign In"
                                </button>
                                <button class="header-button sign-up" type="button" on:click=handle_sign_up>
                                    "Sign Up"
                                </button>
                            </div>
                        }
                        .into_any(),
                        AuthControls::Hidden => ().into_any(),
                    }}
                </div>
            </div>
        </header>
    }
}
