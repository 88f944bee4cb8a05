use crate::pages::footer::Footer;
use leptos::prelude::*;
use leptos_router::components::A;

/// Services offered on the home page, each linking to its page.
pub const SERVICES: [(&str, &str, &str); 4] = [
    (
        "/check-symptoms",
        "Symptom Checker",
        "Describe how you feel and get guidance on next steps.",
    ),
    (
        "/health-chatbot",
        "Health Assistant",
        "Ask health questions in your own language.",
    ),
    (
        "/vaccination-info",
        "Vaccinations",
        "Schedules and centres for routine and travel vaccines.",
    ),
    (
        "/disease-outbreaks",
        "Outbreak Alerts",
        "Current outbreaks reported near you.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app-container">
            <section id="home" class="hero">
                <h2 class="hero-title">"Your health, all around."</h2>
                <p class="hero-text">
                    "Check symptoms, find vaccination centres and stay informed about outbreaks."
                </p>
            </section>

            <section id="features" class="features">
                <h2>"Features"</h2>
                <ul class="feature-list">
                    <li>"Available in multiple Indian languages"</li>
                    <li>"Works on low bandwidth connections"</li>
                    <li>"One tap access to emergency services"</li>
                </ul>
            </section>

            <section id="services" class="services">
                <h2>"Services"</h2>
                <div class="service-grid">
                    {SERVICES
                        .iter()
                        .map(|(href, title, blurb)| {
                            view! {
                                <A href=*href attr:class="service-card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="aboutus" class="about">
                <h2>"About Us"</h2>
                <p>"Swasthya360 brings public health information to everyone."</p>
            </section>

            <section id="contactus" class="contact">
                <h2>"Contact Us"</h2>
                <p>"Write to us at support@swasthya360.in"</p>
            </section>

            <Footer/>
        </div>
    }
}
