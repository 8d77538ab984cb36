use espacio_pages::core::pipeline::fetch_directory;
use espacio_pages::core::render::render_document;
use espacio_pages::domain::ports::PageStore;
use espacio_pages::{LocalPageStore, PageVariant, SiteConfig};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_batch_build_writes_all_variants() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                { "id": "acme", "name": "Acme Co", "category": "construccion" },
                { "id": "pv-energy", "name": "PV Energy" }
            ]));
    });

    let toml_content = format!(
        r#"
[site]
data_url = "{}"
base_url = "https://espacio.example.com"

[branding]
platform_name = "Espacio"

[output]
path = "{}"
"#,
        server.url("/data.json"),
        output_path
    );
    let config = SiteConfig::from_toml_str(&toml_content).unwrap();

    let client = reqwest::Client::new();
    let directory = fetch_directory(&client, &config.site.data_url).await.unwrap();
    api_mock.assert();
    assert_eq!(directory.len(), 2);

    let store = LocalPageStore::new(config.output.path.clone());
    for company in &directory {
        for variant in PageVariant::ALL {
            let opts = config.render_options(config.page_url_for(company, variant));
            let page = render_document(variant, company, &opts);
            store
                .write_page(&config.relative_output_path(&company.id, variant), &page.html)
                .await
                .unwrap();
        }
    }

    for expected in [
        "acme/index.html",
        "acme/card/index.html",
        "acme/link/index.html",
        "pv-energy/index.html",
        "pv-energy/card/index.html",
        "pv-energy/link/index.html",
    ] {
        assert!(temp_dir.path().join(expected).exists(), "missing {}", expected);
    }

    let brochure = std::fs::read_to_string(temp_dir.path().join("acme/index.html")).unwrap();
    assert!(brochure.contains("<title>Acme Co | Espacio</title>"));
    assert!(brochure.contains(
        "og:url\" content=\"https://espacio.example.com/construccion/acme/\""
    ));

    let link = std::fs::read_to_string(temp_dir.path().join("pv-energy/link/index.html")).unwrap();
    // no category in the record, so the og:url drops that segment
    assert!(link.contains("og:url\" content=\"https://espacio.example.com/pv-energy/link/\""));
}

#[tokio::test]
async fn test_batch_build_respects_client_subset() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                { "id": "acme", "name": "Acme Co" },
                { "id": "pv-energy", "name": "PV Energy" }
            ]));
    });

    let toml_content = format!(
        r#"
[site]
data_url = "{}"

[output]
path = "./public"

[clients]
ids = ["pv-energy"]
"#,
        server.url("/data.json")
    );
    let config = SiteConfig::from_toml_str(&toml_content).unwrap();

    let client = reqwest::Client::new();
    let directory = fetch_directory(&client, &config.site.data_url).await.unwrap();

    let built: Vec<&str> = directory
        .iter()
        .filter(|company| config.includes_client(&company.id))
        .map(|company| company.id.as_str())
        .collect();

    assert_eq!(built, vec!["pv-energy"]);
}
