//! 404 Not Found page for the Pouch site

use leptos::prelude::*;

use crate::frontend::components::{Footer, Heading};
use crate::models::HeadingLevel;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="container">
                <Heading level=HeadingLevel::H1>"Page not found"</Heading>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <a href="/" class="button">"Return Home"</a>
            </div>
        </div>
        <Footer/>
    }
}
