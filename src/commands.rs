//! Command handlers

use crate::chart::render_chart;
use crate::chat::{ChatBackend, ChatSession, GeminiClient};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::constants::prompts::build_analysis_prompt;
use crate::domain::model::{EnergyMix, TransportInput, TransportKind};
use crate::domain::service::{compute_emissions, validate};
use crate::error::Result;
use crate::export::export_to_csv;
use crate::output::output_summary;
use crate::types::SavedCalculation;
use chrono::Utc;
use indicatif::ProgressBar;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref model) = cli.model {
        config.model = model.clone();
    }

    match &cli.command {
        Commands::Calculate {
            cars,
            passengers,
            containers,
            solar,
            wind,
            hydro,
            chart,
            output,
        } => {
            let inputs = transport_inputs(*cars, *passengers, *containers);
            let mix = EnergyMix::new(*solar, *wind, *hydro);
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_calculate(&inputs, &mix, output_format, *chart, output.clone())
        }

        Commands::Chat {
            cars,
            passengers,
            containers,
            solar,
            wind,
            hydro,
            save,
        } => {
            let inputs = transport_inputs(*cars, *passengers, *containers);
            let mix = EnergyMix::new(*solar, *wind, *hydro);
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_chat(&cli, &config, &inputs, &mix, output_format, save.clone())
        }

        Commands::Export {
            calculation,
            output,
        } => cmd_export(calculation.clone(), output.clone()),

        Commands::Config {
            show,
            set_model,
            set_api_key_env,
            set_output,
            set_timeout,
            reset,
        } => cmd_config(
            *show,
            set_model.clone(),
            set_api_key_env.clone(),
            *set_output,
            *set_timeout,
            *reset,
        ),
    }
}

/// Assemble the input list in display order
fn transport_inputs(cars: u64, passengers: u64, containers: u64) -> Vec<TransportInput> {
    vec![
        TransportInput::new(TransportKind::Car, cars),
        TransportInput::new(TransportKind::Passenger, passengers),
        TransportInput::new(TransportKind::Container, containers),
    ]
}

fn cmd_calculate(
    inputs: &[TransportInput],
    mix: &EnergyMix,
    output_format: OutputFormat,
    chart: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    validate(inputs, mix)?;

    let summary = compute_emissions(inputs, mix);
    output_summary(output_format, &summary)?;

    if chart {
        println!("\n{}", render_chart(&summary));
    }

    if let Some(output_path) = output {
        let saved = SavedCalculation {
            timestamp: Utc::now(),
            inputs: inputs.to_vec(),
            mix: *mix,
            summary,
        };
        let content = serde_json::to_string_pretty(&saved)?;
        std::fs::write(&output_path, content)?;
        println!("Calculation saved to: {}", output_path.display());
    }

    Ok(())
}

fn cmd_chat(
    cli: &Cli,
    config: &Config,
    inputs: &[TransportInput],
    mix: &EnergyMix,
    output_format: OutputFormat,
    save: Option<PathBuf>,
) -> Result<()> {
    validate(inputs, mix)?;

    let summary = compute_emissions(inputs, mix);
    output_summary(output_format, &summary)?;

    let client = GeminiClient::from_config(config)?;
    if cli.verbose {
        eprintln!("Using model: {}", client.model());
    }

    let mut session = ChatSession::new();

    // Seed the session with the computed figures
    let prompt = build_analysis_prompt(inputs, mix, &summary);
    let reply = with_spinner("The AI is analyzing your data...", || {
        session.ask(&client, prompt)
    })?;
    println!("\n{}\n", reply);

    run_chat_loop(&mut session, &client)?;

    if let Some(save_path) = save {
        let transcript = session.into_transcript(client.model().to_string());
        let content = serde_json::to_string_pretty(&transcript)?;
        std::fs::write(&save_path, content)?;
        println!("Transcript saved to: {}", save_path.display());
    }

    Ok(())
}

/// Read follow-up questions from stdin until EOF or exit/quit
fn run_chat_loop(session: &mut ChatSession, backend: &dyn ChatBackend) -> Result<()> {
    println!("Ask a follow-up question (exit to quit).");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        // A failed turn is reported and the session continues
        match with_spinner("Thinking...", || session.ask(backend, question)) {
            Ok(reply) => println!("\n{}\n", reply),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn with_spinner<T>(message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = f();

    spinner.finish_and_clear();
    result
}

fn cmd_export(calculation_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    // Load saved calculation
    let content = std::fs::read_to_string(&calculation_path)?;
    let saved: SavedCalculation = serde_json::from_str(&content)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = calculation_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("calculation");
        calculation_path.with_file_name(format!("{}.csv", stem))
    });

    export_to_csv(&saved.summary, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_model: Option<String>,
    set_api_key_env: Option<String>,
    set_output: Option<OutputFormat>,
    set_timeout: Option<u64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(model) = set_model {
        config.model = model;
        modified = true;
    }

    if let Some(api_key_env) = set_api_key_env {
        config.api_key_env = api_key_env;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(timeout) = set_timeout {
        config.request_timeout_secs = timeout;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
