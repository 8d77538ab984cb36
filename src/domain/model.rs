use serde::{Deserialize, Serialize};

/// One entry of the shared company directory. The directory JSON is
/// maintained by the admin side and carries more keys than the renderers
/// consume; unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub why_choose_us: Vec<WhyChooseUsItem>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
    #[serde(default)]
    pub reliability_score: Option<u32>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
    #[serde(default)]
    pub platform_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub is_primary_cta: bool,
    #[serde(default)]
    pub cta_text: Option<String>,
}

impl Phone {
    /// WhatsApp target number, treating an empty string as absent.
    pub fn whatsapp_target(&self) -> Option<&str> {
        self.whatsapp.as_deref().filter(|w| !w.is_empty())
    }

    pub fn is_primary_whatsapp(&self) -> bool {
        self.is_primary_cta && self.whatsapp_target().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUsItem {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CompanyRecord {
    /// Phones that can be linked over WhatsApp, in directory order.
    pub fn whatsapp_phones(&self) -> impl Iterator<Item = &Phone> {
        self.phones.iter().filter(|p| p.whatsapp_target().is_some())
    }

    /// First phone qualifying for the floating WhatsApp button.
    pub fn primary_whatsapp(&self) -> Option<&Phone> {
        self.phones.iter().find(|p| p.is_primary_whatsapp())
    }
}

/// Which of the three page layouts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    Brochure,
    Card,
    Link,
}

impl PageVariant {
    pub const ALL: [PageVariant; 3] = [PageVariant::Brochure, PageVariant::Card, PageVariant::Link];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::Brochure => "brochure",
            PageVariant::Card => "card",
            PageVariant::Link => "link",
        }
    }
}

impl std::str::FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brochure" => Ok(PageVariant::Brochure),
            "card" => Ok(PageVariant::Card),
            "link" => Ok(PageVariant::Link),
            other => Err(format!(
                "Unknown page variant '{}'. Expected brochure, card or link",
                other
            )),
        }
    }
}

impl std::fmt::Display for PageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#011248";
pub const DEFAULT_ACCENT_COLOR: &str = "#fdb500";
pub const DEFAULT_PLATFORM_NAME: &str = "Mercado Digital";
pub const DEFAULT_MULTIMEDIA_ROOT: &str = "../../../admin/clientes/multimedia";

/// Presentation defaults handed to the renderer alongside the resolved
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub multimedia_root: String,
    /// Canonical URL of the page being rendered, used for og:url.
    pub page_url: String,
    pub default_primary_color: String,
    pub default_accent_color: String,
    pub default_platform_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            multimedia_root: DEFAULT_MULTIMEDIA_ROOT.to_string(),
            page_url: String::new(),
            default_primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            default_accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            default_platform_name: DEFAULT_PLATFORM_NAME.to_string(),
        }
    }
}

/// A fully assembled HTML document ready to be written out.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub html: String,
}
