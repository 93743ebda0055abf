#![allow(dead_code)]

use leptos::prelude::*;

use pouch_site::frontend::components::HomepageFeatures;
use pouch_site::frontend::render_to_html;
use pouch_site::models::*;

pub const CARD_OPEN: &str = "<div class=\"col col--4\">";

pub const EMPHASIS_SPANS: &[Span] = &[Span::new(9, 15, SpanStyle::Emphasis)];

pub fn record(title: &'static str, icon: Icon, description: &'static str) -> FeatureRecord {
    FeatureRecord::new(title, icon, RichText::plain(description))
}

pub fn sample_records() -> Vec<FeatureRecord> {
    vec![
        record("Tiny", Icon::Mountain, "Ships as a single binary."),
        record("Multi-protocol", Icon::Tree, "TCP, Websocket, QUIC and Unix sockets."),
        record("Horizontally scalable", Icon::React, "Raft-based consistency."),
        record("Durable", Icon::Mountain, "Writes go through a log first."),
        record("Observable", Icon::Tree, "Structured logs out of the box."),
    ]
}

pub fn render_section(features: impl Into<FeatureList>) -> String {
    let features = features.into();
    render_to_html(move || view! { <HomepageFeatures features=features/> })
}

pub fn render_default_section() -> String {
    render_to_html(|| view! { <HomepageFeatures/> })
}

/// Drops the empty comment markers the renderer may place between text nodes.
pub fn strip_markers(html: &str) -> String {
    html.replace("<!---->", "").replace("<!>", "")
}

/// Every `<div class="col col--4">...</div>` block, outermost only, in document order.
pub fn card_fragments(html: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(CARD_OPEN) {
        let card = &rest[start..];
        let end = matching_div_end(card);
        out.push(&card[..end]);
        rest = &card[end..];
    }

    out
}

fn matching_div_end(s: &str) -> usize {
    let mut depth = 0usize;
    let mut i = 0;

    while i < s.len() {
        let tail = &s[i..];
        if tail.starts_with("<div") {
            depth += 1;
            i += 4;
        } else if tail.starts_with("</div>") {
            depth = depth.saturating_sub(1);
            i += 6;
            if depth == 0 {
                return i;
            }
        } else {
            i += tail.chars().next().map_or(1, char::len_utf8);
        }
    }

    s.len()
}

/// Inner text of each `<tag ...>...</tag>` element, markers removed.
pub fn element_texts(html: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut out = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(&open) {
        let after_open = &rest[start + open.len()..];
        // skip e.g. <header> when looking for <h
        if !after_open.starts_with('>') && !after_open.starts_with(' ') {
            rest = after_open;
            continue;
        }
        let Some(gt) = after_open.find('>') else {
            break;
        };
        let body = &after_open[gt + 1..];
        let Some(end) = body.find(&close) else {
            break;
        };
        out.push(strip_markers(&body[..end]));
        rest = &body[end + close.len()..];
    }

    out
}
