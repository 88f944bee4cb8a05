use leptos::prelude::*;

use crate::components::emergency::EMERGENCY_NUMBER;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <div class="footer-content">
                <span class="footer-text">
                    "Swasthya360 does not replace a doctor. In an emergency call "
                    {EMERGENCY_NUMBER}
                    "."
                </span>
            </div>
        </footer>
    }
}
