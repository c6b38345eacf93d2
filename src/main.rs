//! runshot binary entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use runshot::cli::{Cli, Commands, ConvertArgs, ServeArgs};
use runshot::collector::ImageCollector;
use runshot::config::RunshotConfig;
use runshot::error::RunshotError;
use runshot::models::GeminiModel;
use runshot::web::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::Convert(args) => handle_convert(args).await,
        Commands::Models => {
            for model in GeminiModel::all() {
                println!("{}\t{}", model, model.info());
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "runshot failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_serve(args: ServeArgs) -> Result<(), RunshotError> {
    let mut config = RunshotConfig::from_env()?;
    if let Some(addr) = args.addr {
        config = config.with_addr(addr);
    }
    if config.api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; conversions will fail to authenticate");
    }
    let addr = config.addr();
    web::serve(AppState::new(config), addr).await
}

async fn handle_convert(args: ConvertArgs) -> Result<(), RunshotError> {
    let mut config = RunshotConfig::from_env()?;
    if let Some(prompt) = args.prompt {
        config = config.with_prompt(prompt);
    }
    let model = GeminiModel::parse(&args.model)?;

    let mut collector = ImageCollector::new();
    collector.push_paths(args.images.as_slice()).await?;
    let images = collector.finish();

    let result = runshot::generation::convert(model, &config, &images).await?;
    println!("{}", result.text);
    Ok(())
}
