use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use script_optimizer::config::OptimizerConfig;
use script_optimizer::server;
use script_optimizer::{
    capabilities, format_float, ContentStyle, KeywordData, OptimizationLevel, OptimizeRequest,
    Optimizer,
};

#[derive(Parser)]
#[command(
    name = "script-optimizer",
    about = "Video script keyword, readability and engagement optimizer"
)]
struct Cli {
    /// Path to an optimizer TOML config (defaults to config/optimizer.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Optimize(OptimizeArgs),
    Capabilities,
    Config(ConfigArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct OptimizeArgs {
    #[arg(long, conflicts_with = "script_file")]
    script: Option<String>,
    #[arg(long)]
    script_file: Option<PathBuf>,
    #[arg(long)]
    concept: String,
    /// JSON file shaped like {"recommended": {"primary": [{"keyword": "..."}]}}
    #[arg(long)]
    keywords_file: Option<PathBuf>,
    #[arg(long, default_value_t = 10.0)]
    target_duration: f64,
    #[arg(long, default_value = "tutorial")]
    style: String,
    #[arg(long, default_value = "moderate")]
    level: String,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Write the effective config to this path
    #[arg(long)]
    write: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = OptimizerConfig::load(cli.config).map_err(|err| err.to_string())?;
    if let Some(path) = config_path.filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "loaded optimizer config");
    }

    match cli.command {
        Command::Optimize(args) => run_optimize(args, config),
        Command::Capabilities => print_json(&capabilities()),
        Command::Config(args) => run_config(args, config),
        Command::Serve(args) => server::serve(&args.host, args.port, Optimizer::new(config))
            .await
            .map_err(|err| err.to_string()),
    }
}

fn run_optimize(args: OptimizeArgs, config: OptimizerConfig) -> Result<(), String> {
    let script = read_script(args.script, args.script_file.as_deref())?;
    let keywords = match args.keywords_file.as_deref() {
        Some(path) => Some(read_keywords(path)?),
        None => None,
    };
    let level = OptimizationLevel::from_name(&args.level)
        .ok_or_else(|| format!("invalid optimization level: {}", args.level))?;

    let request = OptimizeRequest {
        script: Some(script),
        concept: Some(args.concept),
        keywords,
        target_duration: Some(args.target_duration),
        content_style: Some(ContentStyle::from_name(&args.style)),
        optimization_level: Some(level),
    };

    let report = Optimizer::new(config)
        .optimize(request)
        .map_err(|err| err.to_string())?;

    if args.json {
        return print_json(&report);
    }

    let original = &report.original_metrics;
    let optimized = &report.optimized_metrics;
    println!(
        "Words: {} -> {} | Sentences: {} -> {} | Paragraphs: {} -> {}",
        original.word_count,
        optimized.word_count,
        original.sentence_count,
        optimized.sentence_count,
        original.paragraph_count,
        optimized.paragraph_count
    );
    println!(
        "Keyword density: {}% -> {}% (change {})",
        format_float(original.keyword_density, 2),
        format_float(optimized.keyword_density, 2),
        report.improvements.keyword_density_change
    );
    println!(
        "Readability: {} ({}) -> {} ({})",
        original.readability.score,
        original.readability.level.label(),
        optimized.readability.score,
        optimized.readability.level.label()
    );
    println!(
        "Estimated duration: {} minutes (target {})",
        optimized.estimated_duration_minutes,
        format_float(args.target_duration, 1)
    );

    if !report.optimizations.is_empty() {
        println!("\nOptimizations:");
        for change in &report.optimizations {
            println!("- [{:?}] {}: {}", change.priority, change.location, change.suggestion);
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("- {}", warning.message);
        }
    }

    println!("\nOptimized script:\n\n{}", report.optimized_script);
    Ok(())
}

fn run_config(args: ConfigArgs, config: OptimizerConfig) -> Result<(), String> {
    match args.write {
        Some(path) => {
            config.write(&path).map_err(|err| err.to_string())?;
            println!("Wrote config to {}", path.display());
            Ok(())
        }
        None => {
            let payload = toml::to_string_pretty(&config)
                .map_err(|err| format!("failed to serialize config: {}", err))?;
            print!("{}", payload);
            Ok(())
        }
    }
}

fn read_script(arg: Option<String>, file: Option<&Path>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|err| format!("failed reading {}: {}", path.display(), err));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing script: pass --script, --script-file, or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn read_keywords(path: &Path) -> Result<KeywordData, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| format!("failed reading {}: {}", path.display(), err))?;
    serde_json::from_str(&contents).map_err(|err| format!("invalid keywords file: {}", err))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
