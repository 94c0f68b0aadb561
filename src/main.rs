use clap::Parser;
use fileio_kit::core::csv_io;
use fileio_kit::utils::error::{ErrorSeverity, FileIoError};
use fileio_kit::utils::logger;
use fileio_kit::{CliConfig, Command, LogAppender, RecordConverter, ToolConfig};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let result = cli.resolve().and_then(|config| run(&cli.command, &config));

    if let Err(e) = result {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(command: &Command, config: &ToolConfig) -> Result<(), FileIoError> {
    match command {
        Command::Convert {
            source,
            destination,
            ..
        } => {
            let summary = RecordConverter::from_config(config).convert(source, destination)?;
            println!(
                "Converted {} records to {}",
                summary.records,
                summary.destination.display()
            );
        }
        Command::Log { message, .. } => {
            let entry = LogAppender::from_config(config).append(message)?;
            println!("Log written: {}", entry);
        }
        Command::Seed { path } => {
            let rows = csv_io::write_rows(path, csv_io::sample_products())?;
            println!("Wrote {} rows to {}", rows, path.display());
        }
        Command::ShowLog { .. } => {
            for entry in LogAppender::from_config(config).read_entries()? {
                println!("{}", entry);
            }
        }
    }
    Ok(())
}
