use crate::pages::footer::Footer;
use leptos::prelude::*;

/// Title and summary for every page that needs a session.
pub const PROTECTED_PAGES: [(&str, &str, &str); 6] = [
    ("/landing", "Dashboard", "Your health overview."),
    (
        "/check-symptoms",
        "Symptom Checker",
        "Tell us what you are experiencing.",
    ),
    ("/user-details", "Your Details", "Personal and medical profile."),
    (
        "/health-chatbot",
        "Health Assistant",
        "Chat with the Swasthya360 assistant.",
    ),
    (
        "/vaccination-info",
        "Vaccinations",
        "Schedules and nearby centres.",
    ),
    (
        "/disease-outbreaks",
        "Outbreak Alerts",
        "Outbreaks reported in your region.",
    ),
];

/// Looks up the title and summary for a protected route.
pub fn page_for(route: &str) -> Option<(&'static str, &'static str)> {
    PROTECTED_PAGES
        .iter()
        .find(|(path, _, _)| *path == route)
        .map(|(_, title, summary)| (*title, *summary))
}

#[component]
pub fn ProtectedPage(route: &'static str) -> impl IntoView {
    let (title, summary) = page_for(route).unwrap_or(("Swasthya360", ""));
    view! {
        <div class="app-container">
            <div class="page-content">
                <h1 class="page-title">{title}</h1>
                <p class="page-summary">{summary}</p>
            </div>
            <Footer/>
        </div>
    }
}
