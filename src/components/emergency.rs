use leptos::prelude::*;

/// National ambulance and medical emergency number.
pub const EMERGENCY_NUMBER: &str = "108";

/// Call-for-help button shown in the header on every page except sign-in
/// and sign-up.
#[component]
pub fn EmergencyButton(#[prop(optional, into)] number: Option<String>) -> impl IntoView {
    let number = number.unwrap_or_else(|| EMERGENCY_NUMBER.to_string());
    view! {
        <a href=format!("tel:{}", number) class="emergency-button" title=format!("Call {}", number)>
            "Emergency"
        </a>
    }
}
