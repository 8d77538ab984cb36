use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions, RenderedPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait PageStore: Send + Sync {
    fn write_page(
        &self,
        path: &str,
        html: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_url(&self) -> &str;
    fn client_id(&self) -> Option<&str>;
    fn page_path(&self) -> Option<&str>;
    fn variant(&self) -> PageVariant;
    fn render_options(&self) -> RenderOptions;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<CompanyRecord>>;
    fn resolve<'a>(&self, directory: &'a [CompanyRecord]) -> Result<&'a CompanyRecord>;
    fn render(&self, company: &CompanyRecord) -> RenderedPage;
}
