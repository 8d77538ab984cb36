use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions};
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{
    validate_hex_color, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration for the batch site build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub branding: Option<BrandingSection>,
    pub output: OutputSection,
    pub clients: Option<ClientsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// URL of the shared company directory JSON.
    pub data_url: String,
    /// Public base URL of the published site, used to build og:url values.
    pub base_url: Option<String>,
    pub multimedia_root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingSection {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub platform_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsSection {
    /// Subset of client ids to build; absent means the whole directory.
    pub ids: Option<Vec<String>>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RenderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RenderError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders from the environment; unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("site.data_url", &self.site.data_url)?;

        if let Some(base_url) = &self.site.base_url {
            validate_url("site.base_url", base_url)?;
        }

        validate_path("output.path", &self.output.path)?;

        if let Some(branding) = &self.branding {
            if let Some(primary) = &branding.primary_color {
                validate_hex_color("branding.primary_color", primary)?;
            }
            if let Some(accent) = &branding.accent_color {
                validate_hex_color("branding.accent_color", accent)?;
            }
        }

        if let Some(ids) = self.clients.as_ref().and_then(|c| c.ids.as_ref()) {
            for id in ids {
                validate_non_empty_string("clients.ids", id)?;
            }
        }

        Ok(())
    }

    pub fn multimedia_root(&self) -> &str {
        self.site
            .multimedia_root
            .as_deref()
            .unwrap_or(crate::domain::model::DEFAULT_MULTIMEDIA_ROOT)
    }

    /// Presentation defaults for one page of the build.
    pub fn render_options(&self, page_url: String) -> RenderOptions {
        let branding = self.branding.as_ref();
        let defaults = RenderOptions::default();
        RenderOptions {
            multimedia_root: self.multimedia_root().to_string(),
            page_url,
            default_primary_color: branding
                .and_then(|b| b.primary_color.clone())
                .unwrap_or(defaults.default_primary_color),
            default_accent_color: branding
                .and_then(|b| b.accent_color.clone())
                .unwrap_or(defaults.default_accent_color),
            default_platform_name: branding
                .and_then(|b| b.platform_name.clone())
                .unwrap_or(defaults.default_platform_name),
        }
    }

    /// Canonical URL of a company page, following the published site's
    /// `/{category}/{client-id}/{page}/` layout.
    pub fn page_url_for(&self, company: &CompanyRecord, variant: PageVariant) -> String {
        let Some(base_url) = &self.site.base_url else {
            return String::new();
        };

        let mut url = base_url.trim_end_matches('/').to_string();
        if let Some(category) = company.category.as_deref().filter(|c| !c.is_empty()) {
            url.push('/');
            url.push_str(category);
        }
        url.push('/');
        url.push_str(&company.id);
        match variant {
            PageVariant::Brochure => url.push('/'),
            PageVariant::Card => url.push_str("/card/"),
            PageVariant::Link => url.push_str("/link/"),
        }
        url
    }

    /// Output file for a page, relative to `output.path`.
    pub fn relative_output_path(&self, company_id: &str, variant: PageVariant) -> String {
        match variant {
            PageVariant::Brochure => format!("{}/index.html", company_id),
            PageVariant::Card => format!("{}/card/index.html", company_id),
            PageVariant::Link => format!("{}/link/index.html", company_id),
        }
    }

    /// Whether the build covers this client.
    pub fn includes_client(&self, id: &str) -> bool {
        match self.clients.as_ref().and_then(|c| c.ids.as_ref()) {
            Some(ids) => ids.iter().any(|configured| configured == id),
            None => true,
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_site_config() {
        let toml_content = r#"
[site]
data_url = "https://example.com/data.json"
base_url = "https://espacio.example.com"

[output]
path = "./public"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.data_url, "https://example.com/data.json");
        assert_eq!(config.output.path, "./public");
        assert!(config.validate().is_ok());
        assert!(config.includes_client("anything"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_DIRECTORY_URL", "https://test.example.com/data.json");

        let toml_content = r#"
[site]
data_url = "${TEST_DIRECTORY_URL}"

[output]
path = "./public"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.data_url, "https://test.example.com/data.json");

        std::env::remove_var("TEST_DIRECTORY_URL");
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let bad_url = r#"
[site]
data_url = "invalid-url"

[output]
path = "./public"
"#;
        let config = SiteConfig::from_toml_str(bad_url).unwrap();
        assert!(config.validate().is_err());

        let bad_color = r##"
[site]
data_url = "https://example.com/data.json"

[branding]
primary_color = "#12"

[output]
path = "./public"
"##;
        let config = SiteConfig::from_toml_str(bad_color).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
data_url = "https://example.com/data.json"

[branding]
platform_name = "Espacio"

[output]
path = "./public"

[clients]
ids = ["acme"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert!(config.includes_client("acme"));
        assert!(!config.includes_client("other"));

        let opts = config.render_options(String::new());
        assert_eq!(opts.default_platform_name, "Espacio");
        assert_eq!(opts.default_primary_color, "#011248");
    }

    #[test]
    fn test_page_url_for_follows_site_layout() {
        let toml_content = r#"
[site]
data_url = "https://example.com/data.json"
base_url = "https://espacio.example.com/"

[output]
path = "./public"
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        let company: CompanyRecord = serde_json::from_value(serde_json::json!({
            "id": "pv-energy", "name": "PV Energy", "category": "construccion"
        }))
        .unwrap();

        assert_eq!(
            config.page_url_for(&company, PageVariant::Brochure),
            "https://espacio.example.com/construccion/pv-energy/"
        );
        assert_eq!(
            config.page_url_for(&company, PageVariant::Link),
            "https://espacio.example.com/construccion/pv-energy/link/"
        );
    }
}
