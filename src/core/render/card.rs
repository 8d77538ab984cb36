//! Compact card layout: one centered card with header, about, services,
//! contact list and action buttons, plus floating WhatsApp/Facebook
//! shortcuts.

use crate::core::escape::escape_html;
use crate::core::{assets, fields};
use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions};
use chrono::Datelike;

pub fn render_body(company: &CompanyRecord, opts: &RenderOptions) -> String {
    let name = escape_html(&company.name);
    let profile = escape_html(&assets::profile_image_url(&opts.multimedia_root, &company.id));

    let mut body = String::new();
    body.push_str(&format!(
        r#"<div class="min-h-screen flex items-center justify-center p-4">
    <div class="bg-white rounded-xl shadow-2xl overflow-hidden card-hover-effect w-full max-w-md">
        <div class="bg-primary text-white p-6 text-center">
            <div class="flex justify-center mb-4">
                <img src="{profile}" alt="Logo {name}" class="w-24 h-24 rounded-full border-4 border-white object-cover">
            </div>
            <h1 class="text-2xl font-bold">{name}</h1>
            <p class="text-accent font-medium">{slogan}</p>
        </div>

        <div class="p-6">
            <div class="mb-6">
                <p class="text-gray-700 text-sm">{about}</p>
            </div>

"#,
        slogan = escape_html(fields::present(&company.slogan).unwrap_or("")),
        about = escape_html(fields::present(&company.about).unwrap_or("")),
    ));

    body.push_str(&services_section(company));
    body.push_str(&contact_section(company));
    body.push_str(&action_buttons(company));

    body.push_str(&format!(
        r#"        </div>

        <div class="bg-gray-50 p-4 text-center text-xs text-gray-500">
            <p>© {} {}. Todos los derechos reservados.</p>
        </div>
    </div>
</div>
"#,
        chrono::Utc::now().year(),
        escape_html(fields::platform_name(company, opts)),
    ));

    body.push_str(&floating_buttons(company));
    body
}

fn services_section(company: &CompanyRecord) -> String {
    let entries = if company.services.is_empty() {
        "                    <p class=\"text-gray-700 text-xs\">No hay servicios disponibles.</p>\n"
            .to_string()
    } else {
        company
            .services
            .iter()
            .map(|service| {
                format!(
                    r#"                    <div class="flex items-start space-x-2">
                        <span class="iconify text-accent mt-1" data-icon="{}"></span>
                        <span class="text-xs">{}</span>
                    </div>
"#,
                    escape_html(fields::present(&service.icon).unwrap_or("")),
                    escape_html(fields::present(&service.name).unwrap_or(""))
                )
            })
            .collect()
    };

    format!(
        r#"            <div class="mb-6">
                <h3 class="text-primary font-semibold mb-3 border-l-4 border-accent pl-2">Servicios</h3>
                <div class="grid grid-cols-2 gap-2">
{entries}                </div>
            </div>

"#
    )
}

fn contact_section(company: &CompanyRecord) -> String {
    let mut rows = String::new();

    for phone in &company.phones {
        let number = fields::present(&phone.number).unwrap_or("");
        rows.push_str(&format!(
            r#"                    <div class="flex items-center">
                        <span class="iconify mr-2 text-primary" data-icon="mdi:phone-outline"></span>
                        <a href="tel:{}" class="text-sm hover:text-accent">{}</a>
                    </div>
"#,
            fields::phone_digits(number),
            escape_html(number)
        ));
    }

    for email in &company.emails {
        let email = escape_html(email);
        rows.push_str(&format!(
            r#"                    <div class="flex items-center">
                        <span class="iconify mr-2 text-primary" data-icon="mdi:email-outline"></span>
                        <a href="mailto:{email}" class="text-sm hover:text-accent">{email}</a>
                    </div>
"#
        ));
    }

    if let Some(location) = fields::present(&company.location) {
        rows.push_str(&format!(
            r#"                    <div class="flex items-center">
                        <span class="iconify mr-2 text-primary" data-icon="mdi:map-marker-outline"></span>
                        <span class="text-sm">{}</span>
                    </div>
"#,
            escape_html(location)
        ));
    }

    format!(
        r#"            <div class="mb-6">
                <h3 class="text-primary font-semibold mb-3 border-l-4 border-accent pl-2">Contacto</h3>
                <div class="space-y-2">
{rows}                </div>
            </div>

"#
    )
}

fn action_buttons(company: &CompanyRecord) -> String {
    let mut buttons = String::new();

    for phone in company.whatsapp_phones() {
        let target = phone.whatsapp_target().unwrap_or_default();
        let classes = if phone.is_primary_cta {
            "bg-accent hover:bg-opacity-90 text-primary"
        } else {
            "bg-white border border-accent text-accent hover:bg-accent hover:text-primary"
        };
        buttons.push_str(&format!(
            r#"                <a href="{href}" target="_blank" class="{classes} font-semibold py-2 px-4 rounded-lg shadow-md btn-contact-effect flex items-center justify-center">
                    <span class="iconify mr-2" data-icon="mdi:whatsapp"></span> {label}
                </a>
"#,
            href = escape_html(&assets::whatsapp_link(target, Some(assets::SERVICES_INQUIRY))),
            label = escape_html(&fields::whatsapp_cta_label(PageVariant::Card, phone)),
        ));
    }

    if let Some(facebook) = fields::present(&company.facebook) {
        buttons.push_str(&format!(
            r#"                <a href="{}" target="_blank" class="bg-[#1877F2] hover:bg-[#166FE5] text-white font-semibold py-2 px-4 rounded-lg shadow-md btn-contact-effect flex items-center justify-center">
                    <span class="iconify mr-2" data-icon="mdi:facebook"></span> Visítanos en Facebook
                </a>
"#,
            escape_html(facebook)
        ));
    }

    if let Some(email) = company.emails.first() {
        buttons.push_str(&format!(
            r#"                <a href="mailto:{}" class="bg-white border border-primary text-primary hover:bg-primary hover:text-white font-semibold py-2 px-4 rounded-lg shadow-md btn-contact-effect flex items-center justify-center">
                    <span class="iconify mr-2" data-icon="mdi:email-outline"></span> Enviar Correo
                </a>
"#,
            escape_html(email)
        ));
    }

    format!(
        r#"            <div class="flex flex-col space-y-3">
{buttons}            </div>
"#
    )
}

fn floating_buttons(company: &CompanyRecord) -> String {
    let mut floats = String::new();

    if let Some(phone) = company.primary_whatsapp() {
        let target = phone.whatsapp_target().unwrap_or_default();
        floats.push_str(&format!(
            r#"<div id="whatsappButton" class="fixed bottom-6 right-6 z-50">
    <a href="{}" target="_blank"
       class="bg-accent hover:bg-opacity-90 text-primary p-4 rounded-full shadow-xl flex items-center justify-center btn-contact-effect"
       aria-label="Contactar por WhatsApp">
        <span class="iconify text-2xl" data-icon="mdi:whatsapp"></span>
    </a>
</div>
"#,
            escape_html(&assets::whatsapp_link(target, Some(assets::QUOTE_REQUEST)))
        ));
    }

    if let Some(facebook) = fields::present(&company.facebook) {
        floats.push_str(&format!(
            r#"<div id="facebookButton" class="fixed bottom-6 right-24 z-50">
    <a href="{}" target="_blank"
       class="bg-[#1877F2] hover:bg-[#166FE5] text-white p-4 rounded-full shadow-xl flex items-center justify-center btn-contact-effect"
       aria-label="Visitar Facebook">
        <span class="iconify text-2xl" data-icon="mdi:facebook"></span>
    </a>
</div>
"#,
            escape_html(facebook)
        ));
    }

    floats
}
