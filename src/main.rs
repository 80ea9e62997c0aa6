use clap::Parser;
use cmm::utils::error::{CmmError, ErrorSeverity};
use cmm::utils::{logger, validation::Validate};
use cmm::{CMakeGenerator, CliConfig, GenerationEngine, LocalStorage};

fn exit_code(e: &CmmError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &CmmError) -> ! {
    tracing::error!(
        "Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();
    logger::init(config.verbose, config.log_json);

    tracing::info!("Starting cmm");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };

    let storage = LocalStorage::new(settings.solution_dir.clone());
    let generator = CMakeGenerator::new(storage, settings);

    let engine = GenerationEngine::new(generator);

    if config.dry_run {
        match engine.preview().await {
            Ok(files) => {
                for file in files {
                    println!("==> {} <==", file.path);
                    println!("{}", file.content);
                }
            }
            Err(e) => report_failure(&e),
        }
        return;
    }

    match engine.run().await {
        Ok(report) => {
            tracing::info!("Generation completed");
            println!(
                "✅ Generated {} file(s) for solution '{}' ({} project(s))",
                report.written.len(),
                report.solution,
                report.projects
            );
            for path in &report.written {
                println!("📁 {}", path);
            }
        }
        Err(e) => report_failure(&e),
    }
}
