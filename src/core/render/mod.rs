//! Shared rendering module, parameterized by page variant. Each variant
//! keeps its own layout; resolution, color handling and metadata are
//! common.

mod brochure;
mod card;
mod error;
mod head;
mod link;

pub use error::render_error_document;

use crate::core::fields;
use crate::domain::model::{CompanyRecord, PageVariant, RenderOptions, RenderedPage};

pub fn render_document(
    variant: PageVariant,
    company: &CompanyRecord,
    opts: &RenderOptions,
) -> RenderedPage {
    let title = fields::page_title(variant, company, opts);
    let head = head::render_head(variant, company, opts, &title);

    let body = match variant {
        PageVariant::Brochure => brochure::render_body(company, opts),
        PageVariant::Card => card::render_body(company, opts),
        PageVariant::Link => link::render_body(company, opts),
    };

    RenderedPage {
        title,
        html: document(&head, &body),
    }
}

fn document(head: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n{head}</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(value: serde_json::Value) -> CompanyRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_document_is_complete() {
        let c = company(serde_json::json!({ "id": "acme", "name": "Acme Co" }));
        let page = render_document(PageVariant::Brochure, &c, &RenderOptions::default());

        assert_eq!(page.title, "Acme Co | Mercado Digital");
        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(page.html.contains("<title>Acme Co | Mercado Digital</title>"));
        assert!(page.html.contains("id=\"companyName\""));
        assert!(page.html.ends_with("</html>\n"));
    }

    #[test]
    fn test_each_variant_renders_its_layout() {
        let c = company(serde_json::json!({ "id": "acme", "name": "Acme Co" }));
        let opts = RenderOptions::default();

        let brochure = render_document(PageVariant::Brochure, &c, &opts);
        assert!(brochure.html.contains("banner-container"));

        let card = render_document(PageVariant::Card, &c, &opts);
        assert!(card.html.contains("card-hover-effect w-full max-w-md"));

        let link = render_document(PageVariant::Link, &c, &opts);
        assert!(link.html.contains("pt-12 pb-6"));
    }
}
