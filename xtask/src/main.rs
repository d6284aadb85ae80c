use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command as ProcessCommand, ExitCode};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format, fix, test and check the workspace
    Tidy,
    /// Print the default configuration with its documentation
    Defaults,
}

fn run_step(name: &str, args: &[&str]) -> bool {
    println!("{} cargo {}", "→".cyan().bold(), args.join(" "));
    let status = ProcessCommand::new("cargo")
        .args(args)
        .status()
        .expect("Failed to run cargo");

    if !status.success() {
        println!("\n{}", format!("❌ {name} failed").bold().red());
    }
    status.success()
}

fn tidy() -> ExitCode {
    if !run_step("Formatting", &["fmt", "--all"]) {
        return ExitCode::FAILURE;
    }
    if !run_step("Cargo fix", &["fix", "--allow-dirty", "--workspace"]) {
        return ExitCode::FAILURE;
    }
    if !run_step("Tests", &["test", "--workspace"]) {
        return ExitCode::FAILURE;
    }

    // Count warnings from the JSON diagnostics
    let check_output = ProcessCommand::new("cargo")
        .args(["check", "--workspace", "--message-format=json"])
        .output()
        .expect("Failed to run cargo check");

    if !check_output.status.success() {
        println!("\n{}", "❌ Check failed".bold().red());
        return ExitCode::FAILURE;
    }

    let output_str = String::from_utf8_lossy(&check_output.stdout);
    let warning_count = output_str
        .lines()
        .filter(|line| line.contains("\"level\":\"warning\""))
        .count();

    if warning_count > 0 {
        println!(
            "\n{}",
            format!("× {warning_count} warnings left").bold().red()
        );
        ExitCode::FAILURE
    } else {
        println!("\n{}", "✓ Workspace is tidy".bold().green());
        ExitCode::SUCCESS
    }
}

fn defaults() -> ExitCode {
    match layerhost_core::config::render_documented_yaml(&layerhost_core::Config::default()) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format!("Failed to render defaults: {e}").red());
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match args.command {
        Command::Tidy => tidy(),
        Command::Defaults => defaults(),
    }
}
