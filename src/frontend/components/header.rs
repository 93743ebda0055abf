use leptos::prelude::*;

use super::Heading;
use crate::models::HeadingLevel;

#[component]
pub fn HomepageHeader(#[prop(into)] title: String, #[prop(into)] tagline: String) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <Heading level=HeadingLevel::H1>
                    <span class="hero__title">{title}</span>
                </Heading>
                <p class="hero__subtitle">{tagline}</p>
                <a href="#features" class="button">"Get started"</a>
            </div>
        </header>
    }
}
