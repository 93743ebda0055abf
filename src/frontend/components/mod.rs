//! Reusable UI components for the Pouch site

mod feature_card;
mod footer;
mod header;
mod heading;
mod homepage_features;
mod rich_text;

pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use header::HomepageHeader;
pub use heading::Heading;
pub use homepage_features::HomepageFeatures;
pub use rich_text::RichTextView;
