// Adapters layer: concrete implementations for external systems (listing sources, rendering, reload).

pub mod reload;
pub mod render;
pub mod source;

pub use reload::CommandReloader;
pub use render::JinjaRenderer;
pub use source::{AnySource, CommandSource, FileSource};
