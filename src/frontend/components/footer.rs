use leptos::prelude::*;

use crate::content::PROJECT_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("Copyright © {PROJECT_NAME} contributors. Built with Rust.")}</p>
            </div>
        </footer>
    }
}
