//! Per-client asset locations and outbound link targets. The
//! `{multimedia_root}/{id}/{asset}` layout is an external contract owned by
//! the admin side.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Matches encodeURIComponent: alphanumerics and - _ . ! ~ * ' ( ) pass
// through, everything else is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn profile_image_url(multimedia_root: &str, id: &str) -> String {
    format!("{}/{}/profile.png", multimedia_root, id)
}

pub fn banner_image_url(multimedia_root: &str, id: &str) -> String {
    format!("{}/{}/banner.png", multimedia_root, id)
}

pub fn favicon_url(multimedia_root: &str, id: &str) -> String {
    format!("{}/{}/logo-primario.svg", multimedia_root, id)
}

/// Greeting pre-filled by the in-page CTA buttons.
pub const SERVICES_INQUIRY: &str = "Hola, me gustaría más información sobre sus servicios.";

/// Greeting pre-filled by the floating buttons.
pub const QUOTE_REQUEST: &str = "Hola, necesito una cotización!";

pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", number, encode_component(text)),
        None => format!("https://wa.me/{}", number),
    }
}

pub fn maps_embed_url(location: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&output=embed",
        encode_component(location)
    )
}

/// Generated-avatar fallback for the link page's profile image.
pub fn avatar_fallback_url(name: &str, primary_color: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color=fff&size=128",
        encode_component(name),
        primary_color.trim_start_matches('#')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths_follow_convention() {
        let root = "../../../admin/clientes/multimedia";
        assert_eq!(
            profile_image_url(root, "pv-energy"),
            "../../../admin/clientes/multimedia/pv-energy/profile.png"
        );
        assert_eq!(
            banner_image_url(root, "pv-energy"),
            "../../../admin/clientes/multimedia/pv-energy/banner.png"
        );
        assert_eq!(
            favicon_url(root, "pv-energy"),
            "../../../admin/clientes/multimedia/pv-energy/logo-primario.svg"
        );
    }

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("cotización!"), "cotizaci%C3%B3n!");
        assert_eq!(encode_component("q&a=1"), "q%26a%3D1");
        assert_eq!(encode_component("plain-text_ok.~*'()"), "plain-text_ok.~*'()");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("525551234567", None),
            "https://wa.me/525551234567"
        );
        let with_text = whatsapp_link("525551234567", Some(QUOTE_REQUEST));
        assert_eq!(
            with_text,
            "https://wa.me/525551234567?text=Hola%2C%20necesito%20una%20cotizaci%C3%B3n!"
        );
    }

    #[test]
    fn test_maps_embed_url() {
        assert_eq!(
            maps_embed_url("Av. Reforma 123, CDMX"),
            "https://maps.google.com/maps?q=Av.%20Reforma%20123%2C%20CDMX&output=embed"
        );
    }

    #[test]
    fn test_avatar_fallback_strips_hash() {
        assert_eq!(
            avatar_fallback_url("Acme Co", "#011248"),
            "https://ui-avatars.com/api/?name=Acme%20Co&background=011248&color=fff&size=128"
        );
    }
}
