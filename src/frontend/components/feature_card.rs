use leptos::prelude::*;

use super::{Heading, RichTextView};
use crate::models::{FeatureRecord, HeadingLevel};

/// Card for a single feature: illustration, title, then description.
#[component]
pub fn FeatureCard(record: FeatureRecord) -> impl IntoView {
    let FeatureRecord {
        title,
        icon,
        description,
    } = record;

    view! {
        <div class="col col--4">
            <div class="text--center">
                <span class="featureSvg" role="img" aria-label=title inner_html=icon.svg()></span>
            </div>
            <div class="text--center padding-horiz--md">
                <Heading level=HeadingLevel::H3>{title}</Heading>
                <p>
                    <RichTextView text=description/>
                </p>
            </div>
        </div>
    }
}
