use crate::core::render;
use crate::domain::model::{PageVariant, RenderedPage};
use crate::domain::ports::Pipeline;
use crate::utils::error::{RenderError, Result};

pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch → resolve → render to completion.
    pub async fn run(&self) -> Result<RenderedPage> {
        tracing::info!("Fetching company directory...");
        let directory = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} companies", directory.len());

        let company = self.pipeline.resolve(&directory)?;
        tracing::info!("Resolved company: {}", company.id);

        tracing::info!("Rendering page...");
        Ok(self.pipeline.render(company))
    }

    /// Like [`run`](Self::run), but fatal errors become the styled error
    /// document instead of propagating, so a failure never surfaces as a
    /// blank page. The error is returned alongside for exit-code handling.
    pub async fn run_or_error_page(
        &self,
        variant: PageVariant,
    ) -> (RenderedPage, Option<RenderError>) {
        match self.run().await {
            Ok(page) => (page, None),
            Err(error) => {
                tracing::error!("Page render failed: {}", error);
                (render::render_error_document(variant, &error), Some(error))
            }
        }
    }
}
