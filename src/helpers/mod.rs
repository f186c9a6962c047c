//! Helper functions shared by the loader, the structured-data generator
//! and the render pass export

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
