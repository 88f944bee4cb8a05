use crate::components::Header;
use crate::pages::protected::page_for;
use crate::pages::*;
use crate::store::{UserStore, UserStoreContext};
use crate::visibility::PROTECTED_ROUTES;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router_macro::path;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let user_store = UserStoreContext::provide(UserStore::new());
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <Stylesheet id="leptos" href="/pkg/swasthya-header.css"/>
        <Title text="Swasthya360"/>
        <Link rel="icon" type_="image/x-icon" href="/favicon.ico"/>
        <Link rel="manifest" href="/site.webmanifest"/>
        <Meta name="theme-color" content="#008080"/>

        <Router>
            <SiteHeader user_store set_menu_open/>
            <SideMenu menu_open set_menu_open/>
            <main class="page-body">
                <Routes fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/signin") view=SignInPage/>
                    <Route path=path!("/signup") view=SignUpPage/>
                    <Route path=path!("/landing") view=|| view! { <ProtectedPage route="/landing"/> }/>
                    <Route path=path!("/check-symptoms") view=|| view! { <ProtectedPage route="/check-symptoms"/> }/>
                    <Route path=path!("/user-details") view=|| view! { <ProtectedPage route="/user-details"/> }/>
                    <Route path=path!("/health-chatbot") view=|| view! { <ProtectedPage route="/health-chatbot"/> }/>
                    <Route path=path!("/vaccination-info") view=|| view! { <ProtectedPage route="/vaccination-info"/> }/>
                    <Route path=path!("/disease-outbreaks") view=|| view! { <ProtectedPage route="/disease-outbreaks"/> }/>
                </Routes>
            </main>
        </Router>
    }
}

/// The header wired to the router: Sign In/Sign Up navigate to their pages
/// and the menu button toggles the side menu.
#[component]
fn SiteHeader(user_store: UserStoreContext, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();
    let sign_in = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate("/signin", Default::default()))
    };
    let sign_up = Callback::new(move |_: ()| navigate("/signup", Default::default()));

    view! {
        <Header
            is_authenticated=Signal::derive(move || user_store.is_authenticated())
            on_menu_click=Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open))
            on_sign_in_click=sign_in
            on_sign_up_click=sign_up
            on_sign_out_click=Callback::new(move |_: ()| set_menu_open.set(false))
        />
    }
}

#[component]
fn SideMenu(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || menu_open.get()>
            <aside class="side-menu">
                {PROTECTED_ROUTES
                    .iter()
                    .filter_map(|route| page_for(route).map(|(title, _)| (*route, title)))
                    .map(|(route, title)| {
                        view! {
                            <a href=route class="side-menu-link" on:click=move |_| set_menu_open.set(false)>
                                {title}
                            </a>
                        }
                    })
                    .collect_view()}
            </aside>
        </Show>
    }
}


#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
