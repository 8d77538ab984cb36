pub mod assets;
pub mod color;
pub mod engine;
pub mod escape;
pub mod fields;
pub mod pipeline;
pub mod render;
pub mod resolver;

pub use crate::domain::model::{
    CompanyRecord, PageVariant, RenderOptions, RenderedPage,
};
pub use crate::domain::ports::{ConfigProvider, PageStore, Pipeline};
pub use crate::utils::error::Result;
