pub use config::*;
pub use errors::*;
#[cfg(feature = "ssr")]
pub use logging::*;

mod config;
mod errors;
#[cfg(feature = "ssr")]
mod logging;
