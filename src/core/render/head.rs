//! Document head rendering: title, description/OpenGraph tags, favicon and
//! the root color custom properties.

use crate::core::color::hex_to_rgb;
use crate::core::escape::escape_html;
use crate::core::{assets, fields};
use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions};

pub fn render_head(
    variant: PageVariant,
    company: &CompanyRecord,
    opts: &RenderOptions,
    title: &str,
) -> String {
    let mut head = String::new();
    head.push_str("    <meta charset=\"utf-8\">\n");
    head.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    head.push_str(&format!("    <title>{}</title>\n", escape_html(title)));

    let description = match variant {
        PageVariant::Brochure => fields::describe_company(company).to_string(),
        PageVariant::Card => fields::present(&company.about).unwrap_or("").to_string(),
        PageVariant::Link => fields::link_description(company),
    };
    head.push_str(&format!(
        "    <meta name=\"description\" content=\"{}\">\n",
        escape_html(&description)
    ));

    if variant == PageVariant::Card {
        head.push_str(&format!(
            "    <meta name=\"keywords\" content=\"{}\">\n",
            escape_html(&card_keywords(company))
        ));
    }

    let og_title = match variant {
        PageVariant::Card => title.to_string(),
        _ => company.name.clone(),
    };
    let og_description = match variant {
        PageVariant::Link => fields::link_social_description(company),
        PageVariant::Card => fields::present(&company.about).unwrap_or("").to_string(),
        PageVariant::Brochure => fields::describe_company(company).to_string(),
    };
    let og_image = match variant {
        PageVariant::Card => assets::profile_image_url(&opts.multimedia_root, &company.id),
        _ => assets::banner_image_url(&opts.multimedia_root, &company.id),
    };

    head.push_str(&format!(
        "    <meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&og_title)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:description\" content=\"{}\">\n",
        escape_html(&og_description)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:image\" content=\"{}\">\n",
        escape_html(&og_image)
    ));
    head.push_str(&format!(
        "    <meta property=\"og:url\" content=\"{}\">\n",
        escape_html(&opts.page_url)
    ));
    head.push_str(&format!(
        "    <link rel=\"shortcut icon\" href=\"{}\">\n",
        escape_html(&assets::favicon_url(&opts.multimedia_root, &company.id))
    ));

    head.push_str(&match variant {
        PageVariant::Brochure => brochure_styles(company, opts),
        PageVariant::Card => card_styles(company, opts),
        PageVariant::Link => link_styles(company, opts),
    });

    head
}

fn card_keywords(company: &CompanyRecord) -> String {
    let service_names: Vec<&str> = company
        .services
        .iter()
        .filter_map(|s| fields::present(&s.name))
        .collect();
    format!(
        "{}, {}, {}, {}",
        company.name,
        fields::present(&company.category).unwrap_or(""),
        fields::present(&company.location).unwrap_or(""),
        service_names.join(", ")
    )
}

// Dynamic-class helpers, animations and component styles of the brochure
// layout; the styling itself is a fixed contract carried over from the
// page assets.
const BROCHURE_COMPONENT_STYLES: &str = r#"
        .text-dynamic-primary { color: var(--primary-color); }
        .bg-dynamic-primary { background-color: var(--primary-color); }
        .border-dynamic-primary { border-color: var(--primary-color); }
        .text-dynamic-accent { color: var(--accent-color); }
        .bg-dynamic-accent { background-color: var(--accent-color); }
        .border-dynamic-accent { border-color: var(--accent-color); }
        .hover-text-dynamic-accent:hover { color: var(--accent-color); }
        .hover-bg-dynamic-accent:hover { background-color: var(--accent-color); }

        @keyframes fadeIn {
            from { opacity: 0; transform: translateY(30px); }
            to { opacity: 1; transform: translateY(0); }
        }

        @keyframes pulse {
            0% { transform: scale(1); box-shadow: 0 0 0 0 var(--accent-color); opacity: 0.7; }
            70% { transform: scale(1.05); box-shadow: 0 0 0 10px rgba(253, 181, 0, 0); }
            100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(253, 181, 0, 0); }
        }

        .animate-fadeIn {
            opacity: 0;
            animation: fadeIn 0.8s ease-out forwards;
        }

        .primary-cta-button {
            animation: pulse 2s infinite;
        }

        .card-hover-effect {
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }

        .card-hover-effect:hover {
            transform: translateY(-5px);
            box-shadow: 0 10px 20px rgba(var(--rgb-primary-color, 0, 0), 0.1);
        }

        .btn-contact-effect {
            transition: all 0.2s ease;
        }

        .btn-contact-effect:hover {
            transform: translateY(-3px) scale(1.03);
            filter: brightness(1.1);
        }

        .service-image-container {
            position: relative;
            width: 100%;
            padding-top: 100%;
            overflow: hidden;
            background-color: var(--background-light-color);
            border-bottom: 1px solid rgba(0, 0, 0, 0.1);
        }

        .service-image {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            transition: transform 0.3s ease;
            object-position: center;
        }

        .service-image:hover {
            transform: scale(1.05);
        }

        .banner-container {
            width: 100%;
            height: auto;
            position: relative;
            overflow: hidden;
        }

        .banner-image {
            width: 100%;
            height: auto;
            display: block;
        }

        .email-button {
            min-height: 54px;
            display: flex;
            align-items: center;
            justify-content: center;
        }
"#;

fn brochure_styles(company: &CompanyRecord, opts: &RenderOptions) -> String {
    let primary = fields::primary_color(company, opts);
    let accent = fields::accent_color(company, opts);

    let mut root = String::new();
    root.push_str(&format!(
        "            --primary-color: {};\n",
        escape_html(primary)
    ));
    root.push_str(&format!(
        "            --accent-color: {};\n",
        escape_html(accent)
    ));
    // Only emitted when the effective primary parses; overlay styles fall
    // back to their rgba() defaults otherwise.
    if let Some(rgb) = hex_to_rgb(primary) {
        root.push_str(&format!(
            "            --rgb-primary-color: {};\n",
            rgb.css_components()
        ));
    }
    root.push_str("            --primary-text-color: #333;\n");
    root.push_str("            --secondary-text-color: #555;\n");
    root.push_str("            --background-light-color: #f0f2f5;\n");
    root.push_str("            --background-card-color: #ffffff;\n");

    format!(
        "    <style>\n        :root {{\n{}        }}\n{}    </style>\n",
        root, BROCHURE_COMPONENT_STYLES
    )
}

const CARD_COMPONENT_STYLES: &str = r#"
        * { font-family: 'Montserrat', sans-serif; }
        .bg-primary { background-color: var(--primary-color); }
        .text-primary { color: var(--primary-color); }
        .bg-accent { background-color: var(--accent-color); }
        .text-accent { color: var(--accent-color); }
        .border-accent { border-color: var(--accent-color); }
        .border-primary { border-color: var(--primary-color); }
"#;

fn card_styles(company: &CompanyRecord, opts: &RenderOptions) -> String {
    format!(
        "    <style>\n        :root {{\n            --primary-color: {};\n            --accent-color: {};\n        }}\n{}    </style>\n",
        escape_html(fields::primary_color(company, opts)),
        escape_html(fields::accent_color(company, opts)),
        CARD_COMPONENT_STYLES
    )
}

const LINK_COMPONENT_STYLES: &str = r#"
        .bg-primary { background-color: var(--primary); }
        .text-primary { color: var(--primary); }
        .border-primary { border-color: var(--primary); }
        .hover\:bg-primary:hover { background-color: var(--primary); }

        .bg-accent { background-color: var(--accent); }
        .text-accent { color: var(--accent); }
        .border-accent { border-color: var(--accent); }
        .hover\:bg-accent:hover { background-color: var(--accent); }
"#;

fn link_styles(company: &CompanyRecord, opts: &RenderOptions) -> String {
    format!(
        "    <style>\n        :root {{\n            --primary: {};\n            --accent: {};\n        }}\n{}    </style>\n",
        escape_html(fields::primary_color(company, opts)),
        escape_html(fields::accent_color(company, opts)),
        LINK_COMPONENT_STYLES
    )
}
