use leptos::prelude::*;

use super::FeatureCard;
use crate::models::FeatureList;

/// Grid of feature cards, one per record, in list order.
///
/// Defaults to the Pouch feature list when `features` is not given.
#[component]
pub fn HomepageFeatures(#[prop(optional, into)] features: FeatureList) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {features
                        .iter()
                        .map(|&record| view! { <FeatureCard record=record/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
