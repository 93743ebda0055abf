use leptos::prelude::*;

use crate::models::{RichText, SpanStyle};

#[component]
pub fn RichTextView(text: RichText) -> impl IntoView {
    text.segments()
        .into_iter()
        .map(|segment| match segment.style {
            None => segment.text.into_any(),
            Some(SpanStyle::Emphasis) => view! { <em>{segment.text}</em> }.into_any(),
            Some(SpanStyle::Strong) => view! { <strong>{segment.text}</strong> }.into_any(),
            Some(SpanStyle::Code) => view! { <code>{segment.text}</code> }.into_any(),
        })
        .collect_view()
}
