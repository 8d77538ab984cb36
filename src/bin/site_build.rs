use clap::Parser;
use espacio_pages::core::pipeline::fetch_directory;
use espacio_pages::core::render::render_document;
use espacio_pages::domain::model::PageVariant;
use espacio_pages::domain::ports::PageStore;
use espacio_pages::utils::{logger, validation::Validate};
use espacio_pages::{LocalPageStore, SiteConfig};

#[derive(Parser)]
#[command(name = "site-build")]
#[command(about = "Renders every company's pages from a TOML site configuration")]
struct Args {
    /// Path to the TOML site configuration
    #[arg(short, long, default_value = "site-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting site build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let directory = fetch_directory(&client, &config.site.data_url).await?;
    tracing::info!("Fetched {} companies", directory.len());

    let store = LocalPageStore::new(config.output.path.clone());
    let mut pages_written = 0usize;
    let mut companies_built = 0usize;

    for company in &directory {
        if !config.includes_client(&company.id) {
            continue;
        }
        companies_built += 1;

        for variant in PageVariant::ALL {
            let opts = config.render_options(config.page_url_for(company, variant));
            let page = render_document(variant, company, &opts);
            let output_file = config.relative_output_path(&company.id, variant);

            store.write_page(&output_file, &page.html).await?;
            pages_written += 1;
            tracing::debug!("Wrote {} ({})", output_file, page.title);
        }
    }

    if let Some(ids) = config.clients.as_ref().and_then(|c| c.ids.as_ref()) {
        for id in ids {
            if !directory.iter().any(|company| &company.id == id) {
                tracing::warn!("Configured client '{}' is not in the directory", id);
            }
        }
    }

    tracing::info!("✅ Site build completed");
    println!(
        "✅ {} páginas generadas para {} empresas en {}",
        pages_written, companies_built, config.output.path
    );

    Ok(())
}
