use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use gofer::config::Config;
use gofer::{Agent, Outcome, calc, tools};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gofer")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("gofer.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Repl) => run_repl(config),
        Some(Commands::Act { task, json }) => handle_act_command(task, *json, config),
        Some(Commands::Calc { expression }) => handle_calc_command(expression),
        Some(Commands::Tools) => handle_tools_command(config),
    }
}

fn print_outcome(outcome: &Outcome) {
    if outcome.is_success() {
        println!("{}", outcome.to_string().green());
    } else if matches!(outcome, Outcome::Unhandled) {
        println!("{}", outcome.to_string().yellow());
    } else {
        println!("{}", outcome.to_string().red());
    }
}

fn handle_act_command(task: &str, json: bool, config: &Config) -> Result<()> {
    info!("Dispatching task: {}", task);
    let agent = Agent::from_config(&config.agent).context("Failed to build agent")?;
    let outcome = agent.act(task);

    if json {
        let rendered = serde_json::to_string(&outcome).context("Failed to serialize outcome")?;
        println!("{}", rendered);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn handle_calc_command(expression: &str) -> Result<()> {
    info!("Evaluating expression: {}", expression);
    match calc::evaluate(expression) {
        Ok(value) => println!("{}", Outcome::Number(value).to_string().green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn handle_tools_command(config: &Config) -> Result<()> {
    let agent = Agent::from_config(&config.agent).context("Failed to build agent")?;

    println!("{}", "Registered tools:".cyan());
    let mut registered: Vec<&dyn tools::Tool> = agent.registry().all().collect();
    registered.sort_by_key(|tool| tool.name());
    for tool in registered {
        println!("  {}  {}", tool.name().green(), tool.description());
    }
    Ok(())
}

fn run_repl(config: &Config) -> Result<()> {
    info!("Launching REPL");
    let agent = Agent::from_config(&config.agent).context("Failed to build agent")?;

    println!("{}", "Gofer ready. Type a task, or 'quit' to exit.".cyan());

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break; // EOF
        }

        let task = line.trim();
        if task.is_empty() {
            continue;
        }
        if task.eq_ignore_ascii_case("quit") || task.eq_ignore_ascii_case("exit") {
            break;
        }

        print_outcome(&agent.act(task));
    }

    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
