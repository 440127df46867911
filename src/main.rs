use clap::Parser;
use order_lists::config::{Command, Settings};
use order_lists::core::importer::ACCEPTED_EXTENSIONS;
use order_lists::core::session::loaded_summary;
use order_lists::utils::{logger, validation};
use order_lists::utils::validation::Validate;
use order_lists::{AppError, CliConfig, ImportOutcome, ImportSession, LocalFile, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (檔案 + 命令列)
    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&cli.command, &settings).await {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(command: &Command, settings: &Settings) -> Result<(), AppError> {
    let session = ImportSession::new(LocalStorage::new(settings.store_dir.clone()));

    match command {
        Command::Import { file } => {
            if let Err(e) = validation::validate_file_extension("file", file, &ACCEPTED_EXTENSIONS) {
                tracing::warn!("{}", e);
            }

            let outcome = session.import(&LocalFile::new(file)).await?;
            match &outcome {
                ImportOutcome::Imported(_) => println!("✅ {}", outcome.message()),
                ImportOutcome::Rejected { .. } => {
                    eprintln!("❌ {}", outcome.message());
                    std::process::exit(1);
                }
            }
        }
        Command::Show => {
            let lists = session.current().await;
            if !lists.has_imported_lists() {
                println!("No imported lists.");
                return Ok(());
            }

            println!("{}", loaded_summary(&lists));
            print_section("Parties", &lists.parties);
            print_section("Items", &lists.items);
        }
        Command::Clear => {
            session.clear().await?;
            println!("Cleared imported lists.");
        }
    }

    Ok(())
}

fn print_section(title: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    for value in values {
        println!("  {}", value);
    }
}
