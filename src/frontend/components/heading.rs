use leptos::prelude::*;

use crate::models::HeadingLevel;

/// Section heading at an explicit document level, optionally anchored by `id`.
#[component]
pub fn Heading(
    level: HeadingLevel,
    #[prop(optional, into)] id: String,
    children: Children,
) -> impl IntoView {
    let id = (!id.is_empty()).then_some(id);

    match level {
        HeadingLevel::H1 => view! { <h1 id=id>{children()}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 id=id>{children()}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 id=id>{children()}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 id=id>{children()}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5 id=id>{children()}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6 id=id>{children()}</h6> }.into_any(),
    }
}
