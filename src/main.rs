use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use color_extractor::api;
use color_extractor::models::AppConfig;
use color_extractor::server;
use color_extractor::services::{decode_image, extract_with_retries};

#[derive(Parser)]
#[command(name = "color-extractor")]
#[command(about = "Dominant color extraction and color naming")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract dominant colors from an image file or URL
    Extract {
        /// Image path, or an http(s) URL
        source: String,

        /// Number of colors to extract
        #[arg(short)]
        k: Option<usize>,

        /// Naming convention: "css2" or "xkcd"
        #[arg(long)]
        color_space: Option<String>,

        /// Cluster raw RGB values instead of standardized channels
        #[arg(long)]
        no_normalize: bool,

        /// Seed for centroid initialization (repeatable results)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Name sample colors from a JSON file
    Label {
        /// JSON file of the form {"samples": [[r, g, b], ...]}
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Naming convention: "css2" or "xkcd"
        #[arg(long)]
        color_space: Option<String>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Color Extractor API",
        description = "Dominant color extraction with k-means and nearest color naming",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_index,
        api::handle_predict,
        api::handle_predict_upload,
        api::handle_label,
        api::handle_palette,
        api::handle_refresh_xkcd,
    ),
    components(schemas(
        api::IndexResponse,
        api::PredictResponse,
        api::CentroidResponse,
        api::PredictMeta,
        api::LabelRequest,
        api::LabelResponse,
        api::PaletteResponse,
        api::PaletteColor,
        api::PaletteRefreshResponse,
    )),
    tags(
        (name = "Colors", description = "Dominant color extraction and naming"),
        (name = "Palettes", description = "Named color palettes"),
        (name = "Service", description = "Service information")
    )
)]
struct ApiDoc;

/// Sample colors read by the `label` command
#[derive(Deserialize)]
struct LabelInput {
    samples: Vec<Vec<f64>>,
}

/// Output of the `label` command
#[derive(Serialize)]
struct LabelOutput {
    samples: Vec<Vec<f64>>,
    labels: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Extract {
            source,
            k,
            color_space,
            no_normalize,
            seed,
        }) => run_extract_command(&source, k, color_space, no_normalize, seed).await,
        Some(Commands::Label {
            input,
            output,
            color_space,
        }) => run_label_command(&input, output.as_deref(), color_space).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_extractor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Extract dominant colors and print the report as JSON (no server needed)
async fn run_extract_command(
    source: &str,
    k: Option<usize>,
    color_space: Option<String>,
    no_normalize: bool,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::from_env();
    let query = api::PredictQuery {
        image_url: None,
        k,
        color_space,
        normalize: no_normalize.then_some(false),
    };
    // Validate before touching the image
    let (convention, params) = api::resolve_params(&query, &config)?;

    let state = server::create_app_state(config)?;
    let palette = state.palettes.resolve(convention).await?;
    let bytes = state.images.load(source).await?;
    let grid = decode_image(&bytes)?;

    let extractor = state.config.extraction.extractor(params.k, params.normalize);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = extract_with_retries(
        &extractor,
        &grid,
        &palette,
        state.config.extraction.max_retries,
        &mut rng,
    )?;

    let response = api::PredictResponse::from(report);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Name the colors of a samples file
async fn run_label_command(
    input: &Path,
    output: Option<&Path>,
    color_space: Option<String>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::from_env();
    let convention = match color_space.as_deref() {
        Some(selector) => selector.parse()?,
        None => config.palette.default_convention,
    };

    let text = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let LabelInput { samples } = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("Invalid samples file {}: {e}", input.display()))?;

    let state = server::create_app_state(config)?;
    let palette = state.palettes.resolve(convention).await?;
    let labels = api::label_colors(&palette, &samples)?;

    let json = serde_json::to_string_pretty(&LabelOutput { samples, labels })?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("Labelled colors written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Color Extractor v{VERSION}");
    println!("Dominant color extraction and color naming\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::from_env();

    println!("\nConfiguration: {config_source}");
    println!(
        "  k:           {} (max {})",
        config.extraction.default_k, config.extraction.max_k
    );
    println!(
        "  Sample:      {} px high, normalize = {}",
        config.extraction.max_sample_height, config.extraction.normalize
    );
    println!(
        "  Palette:     {} (xkcd from {})",
        config.palette.default_convention, config.palette.xkcd_url
    );

    println!("\nCommands:");
    println!("  color-extractor serve     Start the HTTP server");
    println!("  color-extractor extract   Extract dominant colors from an image");
    println!("  color-extractor label     Name colors from a samples file");
    println!("\nRun 'color-extractor --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_extractor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        default_k = config.extraction.default_k,
        max_k = config.extraction.max_k,
        color_space = %config.palette.default_convention,
        "Configuration loaded"
    );

    let state = server::create_app_state(config)?;

    // OpenAPI documentation (production only)
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Color extractor listening");

    axum::serve(listener, app).await?;

    Ok(())
}
