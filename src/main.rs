use clap::Parser;
use espacio_pages::domain::ports::PageStore;
use espacio_pages::utils::{logger, validation::Validate};
use espacio_pages::{CliConfig, LocalPageStore, ProfilePipeline, RenderEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting espacio-pages");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let variant = config.variant;
    let output_path = config.output_path.clone();
    let file_name = format!("{}.html", variant.as_str());

    let store = LocalPageStore::new(output_path.clone());
    let pipeline = ProfilePipeline::new(config);
    let engine = RenderEngine::new(pipeline);

    // Fatal errors become the styled error document; the page is written
    // either way.
    let (page, error) = engine.run_or_error_page(variant).await;
    store.write_page(&file_name, &page.html).await?;

    match error {
        None => {
            tracing::info!("✅ Page rendered: {}", page.title);
            println!("✅ Página generada: {}/{}", output_path, file_name);
        }
        Some(e) => {
            eprintln!("❌ {}", e);
            eprintln!("📁 Se escribió una página de error: {}/{}", output_path, file_name);
            std::process::exit(1);
        }
    }

    Ok(())
}
