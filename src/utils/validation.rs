use crate::core::color::hex_to_rgb;
use crate::utils::error::{RenderError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RenderError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if hex_to_rgb(value).is_none() {
        return Err(RenderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a 3- or 6-digit hex color such as #011248".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("site.data_url", "https://example.com/data.json").is_ok());
        assert!(validate_url("site.data_url", "http://example.com").is_ok());
        assert!(validate_url("site.data_url", "").is_err());
        assert!(validate_url("site.data_url", "invalid-url").is_err());
        assert!(validate_url("site.data_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("branding.primary_color", "#011248").is_ok());
        assert!(validate_hex_color("branding.primary_color", "#abc").is_ok());
        assert!(validate_hex_color("branding.primary_color", "fdb500").is_ok());
        assert!(validate_hex_color("branding.primary_color", "notacolor").is_err());
        assert!(validate_hex_color("branding.primary_color", "#12").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("client.id", "pv-energy").is_ok());
        assert!(validate_non_empty_string("client.id", "   ").is_err());
    }
}
