pub mod site_config;
pub mod store;

use crate::domain::model::{
    PageVariant, RenderOptions, DEFAULT_ACCENT_COLOR, DEFAULT_MULTIMEDIA_ROOT,
    DEFAULT_PLATFORM_NAME, DEFAULT_PRIMARY_COLOR,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{validate_hex_color, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "espacio-pages")]
#[command(about = "Renders a company profile page from the shared directory")]
pub struct CliConfig {
    /// URL of the shared company directory JSON
    #[arg(long)]
    pub data_url: String,

    /// Client id to resolve
    #[arg(long)]
    pub client_id: Option<String>,

    /// Page path to derive the id from, e.g. /construccion/pv-energy/link/
    #[arg(long)]
    pub page_path: Option<String>,

    /// Page layout: brochure, card or link
    #[arg(long, default_value = "brochure")]
    pub variant: PageVariant,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_MULTIMEDIA_ROOT)]
    pub multimedia_root: String,

    /// Canonical URL of the published page, used for og:url
    #[arg(long, default_value = "")]
    pub page_url: String,

    #[arg(long, default_value = DEFAULT_PRIMARY_COLOR)]
    pub primary_color: String,

    #[arg(long, default_value = DEFAULT_ACCENT_COLOR)]
    pub accent_color: String,

    #[arg(long, default_value = DEFAULT_PLATFORM_NAME)]
    pub platform_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|id| !id.is_empty())
    }

    fn page_path(&self) -> Option<&str> {
        self.page_path.as_deref().filter(|p| !p.is_empty())
    }

    fn variant(&self) -> PageVariant {
        self.variant
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            multimedia_root: self.multimedia_root.clone(),
            page_url: self.page_url.clone(),
            default_primary_color: self.primary_color.clone(),
            default_accent_color: self.accent_color.clone(),
            default_platform_name: self.platform_name.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("data_url", &self.data_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_hex_color("primary_color", &self.primary_color)?;
        validate_hex_color("accent_color", &self.accent_color)?;

        if ConfigProvider::client_id(self).is_none() && ConfigProvider::page_path(self).is_none() {
            return Err(RenderError::MissingConfig {
                field: "client_id or page_path".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from([
            "espacio-pages",
            "--data-url",
            "https://example.com/data.json",
            "--client-id",
            "acme",
        ])
    }

    #[test]
    fn test_defaults() {
        let config = base_config();
        assert_eq!(config.variant, PageVariant::Brochure);
        assert_eq!(config.primary_color, "#011248");
        assert_eq!(config.accent_color, "#fdb500");
        assert_eq!(config.platform_name, "Mercado Digital");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variant_parsing() {
        let config = CliConfig::parse_from([
            "espacio-pages",
            "--data-url",
            "https://example.com/data.json",
            "--client-id",
            "acme",
            "--variant",
            "link",
        ]);
        assert_eq!(config.variant, PageVariant::Link);
    }

    #[test]
    fn test_requires_an_identifier_source() {
        let mut config = base_config();
        config.client_id = None;
        assert!(matches!(
            config.validate(),
            Err(RenderError::MissingConfig { .. })
        ));

        config.page_path = Some("/construccion/acme/link/".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_branding_color() {
        let mut config = base_config();
        config.primary_color = "notacolor".to_string();
        assert!(config.validate().is_err());
    }
}
