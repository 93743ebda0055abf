use leptos::prelude::*;

use crate::content::{PROJECT_NAME, TAGLINE};
use crate::frontend::components::{Footer, HomepageFeatures, HomepageHeader};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HomepageHeader title=PROJECT_NAME tagline=TAGLINE/>
        <main id="features">
            <HomepageFeatures/>
        </main>
        <Footer/>
    }
}
