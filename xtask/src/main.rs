use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cubefield")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run("cargo fmt --check", &["fmt", "--all", "--", "--check"])?;
            run(
                "cargo clippy",
                &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            )?;
            run("cargo test", &["test", "--workspace"])?;
            run("cargo doc", &["doc", "--workspace", "--no-deps"])?;
        }
        Commands::Fmt => run("cargo fmt --check", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run(
            "cargo clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        )?,
        Commands::Test => run("cargo test", &["test", "--workspace"])?,
        Commands::Doc => run("cargo doc", &["doc", "--workspace", "--no-deps"])?,
        Commands::Build => run("cargo build", &["build", "--workspace"])?,
    }

    Ok(())
}

fn run(what: &str, args: &[&str]) -> Result<()> {
    println!("==> Running {what}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{what} failed");
    }
    Ok(())
}
