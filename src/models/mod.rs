pub use feature::*;
pub use heading_level::*;
pub use icon::*;
pub use rich_text::*;

mod feature;
mod heading_level;
mod icon;
mod rich_text;
