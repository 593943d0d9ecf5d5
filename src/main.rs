use anyhow::Context;
use clap::Parser;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{
    CalcError, CalcOutcome, Calculation, Calculator, CliConfig, Command, OutputFormat, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        // Usage errors share the exit code of other invalid input; --help/--version exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<CalcError>() {
            Some(calc_err) => {
                if tracing::dispatcher::has_been_set() {
                    tracing::error!(
                        "❌ {:#} (Category: {:?}, Severity: {:?})",
                        e,
                        calc_err.category(),
                        calc_err.severity()
                    );
                } else {
                    // Failed before the config could pick a logger.
                    eprintln!("❌ {:#}", e);
                }
                eprintln!("❌ {}", calc_err.user_friendly_message());
                eprintln!("💡 {}", calc_err.recovery_suggestion());
                std::process::exit(calc_err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    let file_config = match &cli.config {
        Some(path) => TomlConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };
    file_config.validate()?;

    let level = Some(file_config.logging.level.as_str());
    if file_config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    let (policy, format) = cli.resolve(&file_config);
    tracing::debug!("Using policy {:?}, format {:?}", policy, format);

    let calculator = Calculator::new(policy);

    match &cli.command {
        Command::Batch { file } => {
            tracing::info!("📁 Reading calculations from: {}", file);
            let content = tokio::fs::read_to_string(file)
                .await
                .map_err(CalcError::from)
                .with_context(|| format!("Failed to read batch file '{}'", file))?;
            let calcs = Calculation::parse_batch(&content)
                .with_context(|| format!("Failed to parse batch file '{}'", file))?;

            let outcomes = calculator.evaluate_all(&calcs)?;
            print_outcomes(&outcomes, format)?;
        }
        command => {
            if let Some(calc) = command.calculation() {
                let outcome = calculator.evaluate(&calc)?;
                match format {
                    OutputFormat::Text => println!("{}", outcome.result),
                    OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
                }
            }
        }
    }

    Ok(())
}

fn print_outcomes(outcomes: &[CalcOutcome], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for outcome in outcomes {
                println!("{}", outcome);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcomes)?),
    }
    Ok(())
}
