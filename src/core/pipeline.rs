use crate::core::{render, resolver};
use crate::domain::model::{CompanyRecord, RenderedPage};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{RenderError, Result};
use reqwest::Client;

pub struct ProfilePipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ProfilePipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn target_id(&self) -> Result<String> {
        if let Some(id) = self.config.client_id() {
            return Ok(id.to_string());
        }
        match self.config.page_path() {
            Some(path) => resolver::client_id_from_path(path)
                .map(str::to_string)
                .ok_or_else(|| RenderError::MissingClientId {
                    path: path.to_string(),
                }),
            None => Err(RenderError::MissingConfig {
                field: "client_id".to_string(),
            }),
        }
    }
}

/// Fetches and decodes the shared directory. Non-2xx responses and
/// malformed JSON are fatal for the page load.
pub async fn fetch_directory(client: &Client, data_url: &str) -> Result<Vec<CompanyRecord>> {
    tracing::debug!("Fetching company directory from: {}", data_url);
    let response = client.get(data_url).send().await?;

    let status = response.status();
    tracing::debug!("Directory response status: {}", status);
    if !status.is_success() {
        return Err(RenderError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let directory: Vec<CompanyRecord> = serde_json::from_str(&body)?;
    Ok(directory)
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ProfilePipeline<C> {
    async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
        fetch_directory(&self.client, self.config.data_url()).await
    }

    fn resolve<'a>(&self, directory: &'a [CompanyRecord]) -> Result<&'a CompanyRecord> {
        let id = self.target_id()?;
        resolver::find_company(directory, &id).ok_or(RenderError::CompanyNotFound { id })
    }

    fn render(&self, company: &CompanyRecord) -> RenderedPage {
        render::render_document(
            self.config.variant(),
            company,
            &self.config.render_options(),
        )
    }
}
