use crate::pages::footer::Footer;
use leptos::prelude::*;
use leptos_router::components::A;

// Credentials are collected by the identity service; these pages only frame
// its widget and give the header a route to hide itself on.

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="app-container">
            <div class="auth-content">
                <h1 class="auth-title">"Sign in to Swasthya360"</h1>
                <div id="identity-widget" class="auth-widget" data-mode="signin"></div>
                <p class="auth-switch">
                    "New here? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
            <Footer/>
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="app-container">
            <div class="auth-content">
                <h1 class="auth-title">"Create your Swasthya360 account"</h1>
                <div id="identity-widget" class="auth-widget" data-mode="signup"></div>
                <p class="auth-switch">
                    "Already registered? "
                    <A href="/signin">"Sign in"</A>
                </p>
            </div>
            <Footer/>
        </div>
    }
}
