//! Styled error documents. Every fatal condition in the page-load sequence
//! ends here: the body is replaced wholesale, no partial template content
//! is emitted.

use crate::core::escape::escape_html;
use crate::domain::model::{PageVariant, RenderedPage};
use crate::utils::error::RenderError;

pub fn render_error_document(variant: PageVariant, error: &RenderError) -> RenderedPage {
    let message = escape_html(&error.to_string());

    let body = match variant {
        PageVariant::Brochure => format!(
            r#"<div class="flex items-center justify-center min-h-screen p-6">
    <div class="text-center p-10 bg-red-100 text-red-700 rounded-lg shadow-lg max-w-2xl">
        <h1 class="text-2xl font-bold mb-4">Error al cargar la información</h1>
        <p class="mb-4">{message}</p>
        <p>Por favor, verifica que el archivo 'data.json' exista y esté bien formado.</p>
    </div>
</div>
"#
        ),
        PageVariant::Card => format!(
            r#"<div class="min-h-screen flex items-center justify-center p-4">
    <div class="bg-white rounded-xl shadow-2xl overflow-hidden p-6 text-center w-full max-w-md">
        <div class="text-red-500 mb-4">
            <span class="iconify text-4xl inline-block" data-icon="mdi:alert-circle-outline"></span>
        </div>
        <h2 class="text-xl font-bold mb-2">Error al cargar los datos</h2>
        <p class="text-gray-700 mb-4">{message}</p>
        <p class="text-gray-500 text-sm">No se pudieron cargar los datos de la tarjeta. Por favor, inténtalo de nuevo más tarde.</p>
    </div>
</div>
"#
        ),
        PageVariant::Link => format!(
            r#"<div class="min-h-screen flex items-center justify-center p-8">
    <div class="text-center max-w-md">
        <h1 class="text-2xl font-bold text-red-600 mb-2">Error</h1>
        <p class="text-gray-700 mb-4">{message}</p>
        <p class="text-gray-500 text-sm">La URL debe seguir la estructura: /[categoria]/[cliente-id]/link/</p>
        <p class="text-gray-500 text-sm mt-2">Ejemplo: /construccion/pv-energy/link/</p>
    </div>
</div>
"#
        ),
    };

    let head = concat!(
        "    <meta charset=\"utf-8\">\n",
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        "    <title>Error</title>\n",
    );

    RenderedPage {
        title: "Error".to_string(),
        html: super::document(head, &body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brochure_error_panel() {
        let error = RenderError::HttpStatus { status: 500 };
        let page = render_error_document(PageVariant::Brochure, &error);
        assert!(page.html.contains("Error al cargar la información"));
        assert!(page.html.contains("HTTP error! status: 500"));
        // no template content survives a fatal error
        assert!(!page.html.contains("id=\"services\""));
        assert!(!page.html.contains("id=\"companyName\""));
    }

    #[test]
    fn test_not_found_names_the_identifier() {
        let error = RenderError::CompanyNotFound {
            id: "acme".to_string(),
        };
        let page = render_error_document(PageVariant::Card, &error);
        assert!(page
            .html
            .contains("No se encontró la empresa con id: acme"));
    }

    #[test]
    fn test_link_error_describes_expected_url_shape() {
        let error = RenderError::MissingClientId {
            path: "/link/".to_string(),
        };
        let page = render_error_document(PageVariant::Link, &error);
        assert!(page.html.contains("/[categoria]/[cliente-id]/link/"));
        assert!(page.html.contains("/construccion/pv-energy/link/"));
    }
}
