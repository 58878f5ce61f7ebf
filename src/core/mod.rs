pub mod binding;
pub mod etl;
pub mod listing;
pub mod merge;
pub mod pipeline;
pub mod row;

pub use crate::domain::model::{Binding, Site, TransformResult};
pub use crate::domain::ports::{
    ConfigProvider, ListingSource, LoadOutcome, Pipeline, Reloader, Renderer, Storage,
};
pub use crate::utils::error::Result;
