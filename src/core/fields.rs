//! Named fallback chains for record fields. Every optional field resolves
//! through one of these functions instead of an inline default, so each
//! chain can be tested on its own.

use crate::domain::model::{CompanyRecord, PageVariant, Phone, RenderOptions};
use regex::Regex;

/// An optional display string, treating the empty string as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn platform_name<'a>(company: &'a CompanyRecord, opts: &'a RenderOptions) -> &'a str {
    present(&company.platform_name).unwrap_or(&opts.default_platform_name)
}

/// Document title. The card prefers the slogan over the platform branding;
/// `name` itself has no fallback.
pub fn page_title(variant: PageVariant, company: &CompanyRecord, opts: &RenderOptions) -> String {
    let suffix = match variant {
        PageVariant::Card => present(&company.slogan).unwrap_or_else(|| platform_name(company, opts)),
        _ => platform_name(company, opts),
    };
    format!("{} | {}", company.name, suffix)
}

/// Meta/OpenGraph description for the brochure and card: about, else
/// slogan, else empty.
pub fn describe_company(company: &CompanyRecord) -> &str {
    present(&company.about)
        .or_else(|| present(&company.slogan))
        .unwrap_or("")
}

/// Link-page meta description: slogan, else about, else a contact prompt.
pub fn link_description(company: &CompanyRecord) -> String {
    present(&company.slogan)
        .or_else(|| present(&company.about))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Contacta con {}", company.name))
}

/// Link-page og:description, with its own terminal fallback.
pub fn link_social_description(company: &CompanyRecord) -> String {
    present(&company.slogan)
        .or_else(|| present(&company.about))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Enlaces de contacto para {}", company.name))
}

pub fn primary_color<'a>(company: &'a CompanyRecord, opts: &'a RenderOptions) -> &'a str {
    present(&company.primary_color).unwrap_or(&opts.default_primary_color)
}

pub fn accent_color<'a>(company: &'a CompanyRecord, opts: &'a RenderOptions) -> &'a str {
    present(&company.accent_color).unwrap_or(&opts.default_accent_color)
}

pub fn reliability_score(company: &CompanyRecord) -> u32 {
    company.reliability_score.unwrap_or(0)
}

pub fn cta_title(company: &CompanyRecord) -> &str {
    company
        .call_to_action
        .as_ref()
        .and_then(|cta| present(&cta.title))
        .unwrap_or("¿Listo para comenzar?")
}

pub fn cta_text(company: &CompanyRecord) -> &str {
    company
        .call_to_action
        .as_ref()
        .and_then(|cta| present(&cta.text))
        .unwrap_or("Contáctanos hoy mismo para más información sobre nuestros servicios.")
}

/// Label for a WhatsApp call-to-action button, per variant.
pub fn whatsapp_cta_label(variant: PageVariant, phone: &Phone) -> String {
    if let Some(text) = present(&phone.cta_text) {
        return text.to_string();
    }
    match variant {
        PageVariant::Brochure => {
            format!("WhatsApp {}", present(&phone.number).unwrap_or(""))
        }
        PageVariant::Card => "¡Cotiza GRATIS!".to_string(),
        PageVariant::Link => "Contactar por WhatsApp".to_string(),
    }
}

/// Strips everything but digits for `tel:` hrefs.
pub fn phone_digits(number: &str) -> String {
    let non_digit = Regex::new(r"\D").unwrap();
    non_digit.replace_all(number, "").into_owned()
}
