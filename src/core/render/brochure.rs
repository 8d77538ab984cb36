//! Full brochure layout: banner header, profile block, sidebar sections,
//! services grid, call-to-action panel and footer.

use crate::core::escape::escape_html;
use crate::core::{assets, fields};
use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions};
use chrono::Datelike;

pub fn render_body(company: &CompanyRecord, opts: &RenderOptions) -> String {
    let name = escape_html(&company.name);
    let banner = escape_html(&assets::banner_image_url(&opts.multimedia_root, &company.id));
    let profile = escape_html(&assets::profile_image_url(&opts.multimedia_root, &company.id));
    let slogan = escape_html(fields::present(&company.slogan).unwrap_or(""));

    let mut body = String::new();
    body.push_str(&format!(
        r##"<div class="w-full">
    <header class="banner-container shadow-lg">
        <img id="bannerImg" src="{banner}" alt="Banner de {name}" class="banner-image">
        <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-black/20 to-transparent"></div>
    </header>

    <div class="bg-white shadow-md">
        <div class="container mx-auto px-4 sm:px-6 lg:px-8">
            <div class="flex flex-col sm:flex-row items-center sm:items-end pt-4 pb-6">
                <div class="relative -mt-20">
                    <img id="profileImg" src="{profile}" alt="Foto de perfil de {name}" class="w-32 h-32 md:w-40 md:h-40 rounded-full object-cover border-4 border-white shadow-xl">
                </div>
                <div class="mt-4 sm:mt-0 sm:ml-6 flex-grow text-center sm:text-left">
                    <h1 id="companyName" class="text-2xl md:text-3xl font-bold text-dynamic-primary">{name}</h1>
                    <p id="companyTagline" class="text-md text-secondary-text-color opacity-90">{slogan}</p>
                </div>
                <nav class="mt-4 sm:mt-0 flex space-x-4 sm:space-x-6">
                    <a href="#about" class="font-medium transition duration-300 text-dynamic-primary hover-text-dynamic-accent">Nosotros</a>
                    <a href="#services" class="font-medium transition duration-300 text-dynamic-primary hover-text-dynamic-accent">Servicios</a>
                    <a href="#contact" class="font-medium transition duration-300 text-dynamic-primary hover-text-dynamic-accent">Contacto</a>
                </nav>
            </div>
        </div>
    </div>

    <main class="container mx-auto px-4 sm:px-6 lg:px-8 py-8 md:py-12 grid grid-cols-1 lg:grid-cols-3 gap-8">
        <aside class="lg:col-span-1 space-y-6">
"##
    ));

    body.push_str(&about_section(company));
    body.push_str(&why_choose_us_section(company));
    body.push_str(&reliability_section(company));
    body.push_str(&quick_contact_section(company));

    body.push_str(
        r#"        </aside>

        <div class="lg:col-span-2 space-y-8">
"#,
    );
    body.push_str(&services_section(company));
    body.push_str(&cta_section(company));
    body.push_str(
        r#"        </div>
    </main>

"#,
    );
    body.push_str(&footer(company, opts));
    body.push_str("</div>\n");
    body.push_str(&floating_whatsapp(company));
    body
}

fn about_section(company: &CompanyRecord) -> String {
    format!(
        r#"            <section id="about" class="bg-white p-6 rounded-xl shadow-lg animate-fadeIn card-hover-effect" style="animation-delay: 0.1s;">
                <h2 class="text-xl font-semibold mb-4 text-dynamic-primary border-l-4 border-dynamic-accent pl-3">Sobre Nosotros</h2>
                <p id="companyDescription" class="text-secondary-text-color leading-relaxed text-sm">{}</p>
            </section>
"#,
        escape_html(fields::present(&company.about).unwrap_or(""))
    )
}

fn why_choose_us_section(company: &CompanyRecord) -> String {
    if company.why_choose_us.is_empty() {
        return String::new();
    }

    let items: String = company
        .why_choose_us
        .iter()
        .map(|item| {
            format!(
                r#"                    <div class="flex items-start space-x-3">
                        <span class="iconify text-3xl mt-1 text-dynamic-accent" data-icon="{}"></span>
                        <div>
                            <h4 class="font-semibold text-dynamic-primary">{}</h4>
                            <p class="text-sm text-secondary-text-color">{}</p>
                        </div>
                    </div>
"#,
                escape_html(fields::present(&item.icon).unwrap_or("mdi:check-circle-outline")),
                escape_html(fields::present(&item.title).unwrap_or("")),
                escape_html(fields::present(&item.text).unwrap_or(""))
            )
        })
        .collect();

    format!(
        r#"            <section id="whyChooseUs" class="bg-white p-6 rounded-xl shadow-lg animate-fadeIn card-hover-effect" style="animation-delay: 0.15s;">
                <h2 class="text-xl font-semibold mb-4 text-dynamic-primary border-l-4 border-dynamic-accent pl-3">Por Qué Elegirnos</h2>
                <div class="space-y-4">
{items}                </div>
            </section>
"#
    )
}

fn reliability_section(company: &CompanyRecord) -> String {
    let score = fields::reliability_score(company);
    format!(
        r#"            <section id="reliability" class="bg-white p-6 rounded-xl shadow-lg animate-fadeIn card-hover-effect" style="animation-delay: 0.2s;">
                <h2 class="text-xl font-semibold mb-4 text-dynamic-primary border-l-4 border-dynamic-accent pl-3">Nivel de Confianza</h2>
                <div class="flex flex-col items-center">
                    <svg class="w-32 h-32" viewBox="0 0 36 36">
                        <path class="text-gray-200" stroke-width="3" fill="none" stroke="currentColor"
                            d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831" />
                        <path class="text-dynamic-accent" stroke-width="3" fill="none"
                            stroke="currentColor" stroke-linecap="round"
                            stroke-dasharray="{score}, 100"
                            d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831" />
                        <text x="18" y="20.35" class="text-sm font-bold text-dynamic-primary" fill="currentColor"
                            text-anchor="middle">{score}%</text>
                    </svg>
                    <p class="mt-3 text-secondary-text-color text-center text-sm">Basado en valoraciones y proyectos.</p>
                </div>
            </section>
"#
    )
}

fn quick_contact_section(company: &CompanyRecord) -> String {
    let mut section = String::from(
        r#"            <section id="quickContact" class="bg-white p-6 rounded-xl shadow-lg animate-fadeIn card-hover-effect" style="animation-delay: 0.3s;">
                <h2 class="text-xl font-semibold mb-4 text-dynamic-primary border-l-4 border-dynamic-accent pl-3">Contacto Directo</h2>
"#,
    );

    if let Some(email) = company.emails.first() {
        let email = escape_html(email);
        section.push_str(&format!(
            r#"                <div class="flex items-center mb-3">
                    <span class="iconify mr-3 text-xl text-dynamic-primary" data-icon="mdi:email-outline"></span>
                    <a href="mailto:{email}" class="text-secondary-text-color hover-text-dynamic-accent transition duration-300 text-sm">{email}</a>
                </div>
"#
        ));
    }

    if !company.phones.is_empty() {
        section.push_str("                <div class=\"space-y-2 mb-3\">\n");
        for phone in &company.phones {
            section.push_str(&format!(
                r#"                    <div class="flex items-center text-sm">
                        <span class="iconify mr-3 text-xl text-dynamic-primary" data-icon="mdi:phone-outline"></span>
                        <span class="text-secondary-text-color">{}</span>
                    </div>
"#,
                escape_html(fields::present(&phone.number).unwrap_or(""))
            ));
        }
        section.push_str("                </div>\n");
    }

    if let Some(location) = fields::present(&company.location) {
        section.push_str(&format!(
            r#"                <div class="flex items-start mb-4">
                    <span class="iconify mr-3 text-xl text-dynamic-primary mt-1" data-icon="mdi:map-marker-outline"></span>
                    <div>
                        <span class="text-secondary-text-color text-sm">{}</span>
"#,
            escape_html(location)
        ));
        // The embed needs both fields: mapsLink signals an embeddable
        // location, the query itself comes from the location text.
        if fields::present(&company.maps_link).is_some() {
            section.push_str(&format!(
                r#"                        <div class="mt-3 rounded-lg overflow-hidden">
                            <iframe src="{}" width="100%" height="150" style="border:0;" allowfullscreen="" loading="lazy"></iframe>
                        </div>
"#,
                escape_html(&assets::maps_embed_url(location))
            ));
        }
        section.push_str(
            r#"                    </div>
                </div>
"#,
        );
    }

    section.push_str(&social_row(company));
    section.push_str("            </section>\n");
    section
}

fn social_row(company: &CompanyRecord) -> String {
    let links: [(&Option<String>, &str); 6] = [
        (&company.facebook, "fab fa-facebook-f"),
        (&company.instagram, "fab fa-instagram"),
        (&company.tiktok, "fab fa-tiktok"),
        (&company.youtube, "fab fa-youtube"),
        (&company.website, "fas fa-globe"),
        (&company.maps_link, "fas fa-map-marker-alt"),
    ];

    if !links.iter().any(|(url, _)| fields::present(url).is_some()) {
        return String::new();
    }

    let mut row =
        String::from("                <div class=\"flex justify-start space-x-3 mt-4\">\n");
    for (url, icon) in links {
        if let Some(href) = fields::present(url) {
            row.push_str(&format!(
                r#"                    <a href="{}" target="_blank" class="inline-flex items-center justify-center w-10 h-10 rounded-full bg-dynamic-primary text-dynamic-accent hover:bg-dynamic-accent hover:text-white transition-colors duration-300">
                        <i class="{icon}"></i>
                    </a>
"#,
                escape_html(href)
            ));
        }
    }
    row.push_str("                </div>\n");
    row
}

fn services_section(company: &CompanyRecord) -> String {
    let cards = if company.services.is_empty() {
        "                    <p class=\"text-secondary-text-color\">No hay servicios disponibles.</p>\n".to_string()
    } else {
        company
            .services
            .iter()
            .enumerate()
            .map(|(index, service)| {
                let image = match fields::present(&service.image) {
                    Some(src) => format!(
                        r#"                        <div class="service-image-container rounded-t-lg bg-white">
                            <img src="{}" alt="{}" class="service-image">
                            <div class="absolute inset-0 bg-gradient-to-t from-black/10 via-transparent to-transparent"></div>
                        </div>
"#,
                        escape_html(src),
                        escape_html(fields::present(&service.name).unwrap_or(""))
                    ),
                    None => String::new(),
                };
                format!(
                    r#"                    <div class="bg-white rounded-lg shadow-md card-hover-effect animate-fadeIn flex flex-col h-full" style="animation-delay: {delay:.1}s;">
{image}                        <div class="p-4 flex-grow">
                            <div class="flex items-center mb-2">
                                <span class="iconify text-2xl mr-2 text-dynamic-accent" data-icon="{icon}"></span>
                                <h3 class="text-lg font-semibold text-dynamic-primary">{name}</h3>
                            </div>
                            <p class="text-secondary-text-color text-sm">{description}</p>
                        </div>
                    </div>
"#,
                    delay = 0.3 + index as f64 * 0.1,
                    icon = escape_html(fields::present(&service.icon).unwrap_or("")),
                    name = escape_html(fields::present(&service.name).unwrap_or("")),
                    description = escape_html(fields::present(&service.description).unwrap_or(""))
                )
            })
            .collect()
    };

    format!(
        r#"            <section id="services" class="bg-white p-6 rounded-xl shadow-lg animate-fadeIn" style="animation-delay: 0.4s;">
                <h2 class="text-xl font-semibold mb-6 text-dynamic-primary border-l-4 border-dynamic-accent pl-3">Nuestros Servicios</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
{cards}                </div>
            </section>
"#
    )
}

fn cta_section(company: &CompanyRecord) -> String {
    let mut buttons = String::new();
    for phone in company.whatsapp_phones() {
        let target = phone.whatsapp_target().unwrap_or_default();
        let classes = if phone.is_primary_cta {
            "bg-dynamic-accent text-dynamic-primary primary-cta-button"
        } else {
            "bg-transparent border-2 border-dynamic-accent text-dynamic-accent"
        };
        buttons.push_str(&format!(
            r#"                        <a href="{href}" target="_blank" class="{classes} font-semibold py-3 px-6 rounded-lg shadow-lg btn-contact-effect flex items-center justify-center min-w-[240px]">
                            <i class="fab fa-whatsapp cta-button-icon text-xl mr-2"></i> {label}
                        </a>
"#,
            href = escape_html(&assets::whatsapp_link(target, Some(assets::SERVICES_INQUIRY))),
            label = escape_html(&fields::whatsapp_cta_label(PageVariant::Brochure, phone)),
        ));
    }

    if let Some(email) = company.emails.first() {
        buttons.push_str(&format!(
            r#"                        <a href="mailto:{}" class="bg-gray-100 text-dynamic-primary font-semibold py-3 px-6 rounded-lg shadow-lg btn-contact-effect flex items-center justify-center min-w-[240px] email-button">
                            <span class="iconify cta-button-icon" data-icon="mdi:email-outline"></span> Enviar Correo
                        </a>
"#,
            escape_html(email)
        ));
    }

    format!(
        r#"            <section id="contact" class="bg-dynamic-primary text-white p-8 rounded-xl shadow-2xl animate-fadeIn" style="animation-delay: 0.5s;">
                <div class="text-center">
                    <span class="iconify text-6xl text-dynamic-accent mx-auto mb-4" data-icon="mdi:handshake-outline"></span>
                    <h2 class="text-2xl md:text-3xl font-bold mb-3">{title}</h2>
                    <p class="text-lg opacity-90 mb-8 max-w-xl mx-auto">{text}</p>

                    <div class="flex flex-col sm:flex-row justify-center items-center gap-4">
{buttons}                    </div>
                </div>
            </section>
"#,
        title = escape_html(fields::cta_title(company)),
        text = escape_html(fields::cta_text(company)),
    )
}

fn footer(company: &CompanyRecord, opts: &RenderOptions) -> String {
    format!(
        r#"    <footer class="bg-dynamic-primary text-gray-300 py-8 text-center mt-12">
        <p>&copy; {year} {platform}. Todos los derechos reservados.</p>
        <p class="text-sm opacity-80 mt-2">
            Un perfil en <a href="https://mercado-digital-page.github.io/espacio/" class="text-dynamic-accent font-bold hover:underline">Mercado Digital | Espacio</a>
        </p>
    </footer>
"#,
        year = chrono::Utc::now().year(),
        platform = escape_html(fields::platform_name(company, opts)),
    )
}

fn floating_whatsapp(company: &CompanyRecord) -> String {
    let Some(phone) = company.primary_whatsapp() else {
        return String::new();
    };
    let target = phone.whatsapp_target().unwrap_or_default();
    format!(
        r#"<div class="fixed bottom-6 right-6 z-50 animate-fadeIn" style="animation-delay: 1s; opacity: 0;">
    <a href="{}" target="_blank"
       class="bg-dynamic-accent hover:bg-dynamic-accent text-dynamic-primary p-4 rounded-full shadow-xl flex items-center justify-center primary-cta-button btn-contact-effect h-16 w-16"
       aria-label="Contactar por WhatsApp para cotización">
        <i class="fab fa-whatsapp text-2xl"></i>
    </a>
</div>
"#,
        escape_html(&assets::whatsapp_link(target, Some(assets::QUOTE_REQUEST)))
    )
}
