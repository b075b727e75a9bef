use clap::Parser;
use coupon_etl::core::ConfigProvider;
use coupon_etl::utils::{logger, validation::Validate};
use coupon_etl::{CouponPipeline, EtlEngine, LocalStorage, TomlConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "coupon-toml")]
#[command(about = "Coupon cross-reference driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "coupon-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be processed without reading any source
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.log_format() == Some("json") {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.work_dir().to_string());
    let pipeline = CouponPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Valid coupons saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Coupon run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    let rules = config.code_rules();
    eprintln!("📋 Configuration Summary:");
    eprintln!(
        "  Pipeline: {} v{}",
        config.pipeline.name,
        config.pipeline.version.as_deref().unwrap_or("-")
    );
    eprintln!("  Directory: {}", config.work_dir());
    eprintln!("  Sources: {}", config.source_files().join(", "));
    eprintln!("  Output: {}", config.output_path());
    eprintln!(
        "  Code length: {}..={}",
        rules.min_length, rules.max_length
    );
    eprintln!();
}

fn perform_dry_run(config: &TomlConfig) {
    eprintln!("🔍 Dry Run Analysis:");
    let dir = Path::new(config.work_dir());

    for file in config.source_files() {
        let path = dir.join(file);
        match std::fs::metadata(&path) {
            Ok(meta) => eprintln!("  ✅ {} ({} bytes compressed)", path.display(), meta.len()),
            Err(e) => eprintln!("  ❌ {} ({})", path.display(), e),
        }
    }

    let output = dir.join(config.output_path());
    if output.exists() {
        eprintln!("  ⚠️ {} exists and will be overwritten", output.display());
    } else {
        eprintln!("  📄 {} will be created", output.display());
    }

    eprintln!();
    eprintln!("✅ Dry run analysis complete.");
}
