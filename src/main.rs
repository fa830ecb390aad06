use clap::Parser;
use first_steps::utils::error::AppError;
use first_steps::utils::logger;
use first_steps::{enumerate, greet, AppConfig, BufLineReader, CliConfig, Command, GuessLoop};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&cli.command, &config) {
        exit_with(&e);
    }

    Ok(())
}

fn run(command: &Command, config: &AppConfig) -> first_steps::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Guess { .. } => {
            let mut reader = BufLineReader::stdin();
            let report = GuessLoop::from_settings(&config.guess).run(&mut reader, &mut out)?;
            tracing::debug!("Guess loop report: {:?}", report);
        }
        Command::Greet { .. } => {
            let mut reader = BufLineReader::stdin();
            let name = greet(&mut reader, &mut out, &config.greeting)?;
            tracing::debug!("Greeted {:?}", name);
        }
        Command::List { .. } => {
            let count = enumerate(&config.items, &mut out)?;
            tracing::debug!("Listed {} items", count);
        }
    }

    out.flush().map_err(AppError::Output)
}

fn exit_with(e: &AppError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.exit_code());
}
