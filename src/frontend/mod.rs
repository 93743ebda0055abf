pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::content::TAGLINE;

/// HTML shell for SSR - provides the full document structure
#[component]
pub fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=TAGLINE/>
                <title>{title}</title>
                <link rel="stylesheet" href="/static/css/site.css"/>
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Renders a view to an HTML string under a fresh reactive owner.
pub fn render_to_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

/// Renders `page` wrapped in the [`Document`] shell.
pub fn render_page<F, V>(title: &str, page: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let title = title.to_string();
    render_to_html(move || {
        view! {
            <Document title=title>
                {page()}
            </Document>
        }
    })
}
