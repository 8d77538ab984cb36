//! Linktree-style layout: avatar header plus a stack of contact and social
//! link buttons.

use crate::core::escape::escape_html;
use crate::core::{assets, fields};
use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions};
use chrono::Datelike;

pub fn render_body(company: &CompanyRecord, opts: &RenderOptions) -> String {
    let name = escape_html(&company.name);
    let profile = escape_html(&assets::profile_image_url(&opts.multimedia_root, &company.id));
    let avatar_fallback = escape_html(&assets::avatar_fallback_url(
        &company.name,
        fields::primary_color(company, opts),
    ));

    let slogan_line = match fields::present(&company.slogan) {
        Some(slogan) => format!(
            "                <p class=\"text-gray-600 text-center mb-6\">{}</p>\n",
            escape_html(slogan)
        ),
        None => String::new(),
    };

    let mut body = String::new();
    body.push_str(&format!(
        r#"<div class="min-h-screen flex flex-col items-center">
    <header class="w-full max-w-md px-4 pt-12 pb-6">
        <div class="flex flex-col items-center">
            <img src="{profile}" alt="{name}"
                 class="w-24 h-24 rounded-full border-4 border-white shadow-lg object-cover mb-4"
                 onerror="this.src='{avatar_fallback}'">

            <h1 class="text-2xl font-bold text-primary text-center mb-1">{name}</h1>
{slogan_line}        </div>
    </header>

    <main class="w-full max-w-md px-4 pb-8 flex-1">
        <div class="space-y-3">
"#
    ));

    body.push_str(&link_buttons(company));

    body.push_str(&format!(
        r#"        </div>
    </main>

    <footer class="w-full max-w-md px-4 pb-8 text-center">
        <p class="text-gray-500 text-sm">© {} {}</p>
    </footer>
</div>
"#,
        chrono::Utc::now().year(),
        escape_html(fields::platform_name(company, opts)),
    ));

    body
}

fn link_buttons(company: &CompanyRecord) -> String {
    let mut buttons = String::new();

    for phone in company.whatsapp_phones() {
        let target = phone.whatsapp_target().unwrap_or_default();
        let classes = if phone.is_primary_cta {
            "bg-green-500 hover:bg-green-600 text-white"
        } else {
            "bg-white border-2 border-green-500 text-green-600 hover:bg-green-50"
        };
        buttons.push_str(&format!(
            r#"            <a href="{href}" class="block {classes} font-medium py-3 px-4 rounded-lg text-center transition-colors shadow-sm">
                <i class="fab fa-whatsapp mr-2"></i> {label}
            </a>
"#,
            href = escape_html(&assets::whatsapp_link(target, None)),
            label = escape_html(&fields::whatsapp_cta_label(PageVariant::Link, phone)),
        ));
    }

    if let Some(facebook) = fields::present(&company.facebook) {
        buttons.push_str(&social_button(
            facebook,
            "bg-[#1877F2] hover:bg-[#166FE5] text-white",
            "fab fa-facebook-f",
            "Facebook",
        ));
    }

    if let Some(instagram) = fields::present(&company.instagram) {
        buttons.push_str(&social_button(
            instagram,
            "bg-gradient-to-r from-[#F58529] via-[#DD2A7B] to-[#8134AF] hover:opacity-90 text-white",
            "fab fa-instagram",
            "Instagram",
        ));
    }

    if let Some(tiktok) = fields::present(&company.tiktok) {
        buttons.push_str(&social_button(
            tiktok,
            "bg-black hover:bg-gray-900 text-white",
            "fab fa-tiktok",
            "TikTok",
        ));
    }

    if let Some(youtube) = fields::present(&company.youtube) {
        buttons.push_str(&social_button(
            youtube,
            "bg-[#FF0000] hover:bg-[#CC0000] text-white",
            "fab fa-youtube",
            "YouTube",
        ));
    }

    if let Some(website) = fields::present(&company.website) {
        buttons.push_str(&social_button(
            website,
            "bg-primary hover:bg-accent text-white",
            "fas fa-globe",
            "Sitio Web",
        ));
    }

    if let Some(maps_link) = fields::present(&company.maps_link) {
        let label = fields::present(&company.location).unwrap_or("Ubicación");
        buttons.push_str(&social_button(
            maps_link,
            "bg-gray-800 hover:bg-gray-900 text-white",
            "fas fa-map-marker-alt",
            label,
        ));
    }

    buttons
}

fn social_button(href: &str, classes: &str, icon: &str, label: &str) -> String {
    format!(
        r#"            <a href="{}" target="_blank" class="block {classes} font-medium py-3 px-4 rounded-lg text-center transition-colors shadow-sm">
                <i class="{icon} mr-2"></i> {}
            </a>
"#,
        escape_html(href),
        escape_html(label),
    )
}
