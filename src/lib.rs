pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::site_config::SiteConfig;
pub use config::store::LocalPageStore;
pub use config::CliConfig;
pub use core::engine::RenderEngine;
pub use core::pipeline::ProfilePipeline;
pub use core::render::{render_document, render_error_document};
pub use domain::model::{CompanyRecord, PageVariant, RenderOptions, RenderedPage};
pub use utils::error::{RenderError, Result};
