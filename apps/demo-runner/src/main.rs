//! demo-runner: walks through the review fixtures and prints what each
//! planted defect actually does.
//!
//! Run:
//! ```bash
//! # every scenario, pretty logs on stderr
//! cargo run -p demo-runner
//!
//! # one fixture, JSON report on stdout
//! cargo run -p demo-runner -- --json api --user-id "1 OR 1=1"
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;
mod scenarios;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixtures::findings::{catalog, findings_for, Finding, Fixture};
use fixtures::User;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scenarios::{ApiReport, CartStep, FullReport};

#[derive(Debug, Parser)]
#[command(name = "demo-runner", version, about = "Run the review fixture scenarios")]
struct Cli {
    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shopping cart: unknown-id removal and negative quantities
    Cart,
    /// Verified user listing over the sample users
    Users,
    /// Vulnerable API handlers against the recording query stub
    Api {
        /// User id passed to get_user and delete_user
        #[arg(long)]
        user_id: Option<String>,
        /// Term passed to search_users
        #[arg(long)]
        search: Option<String>,
    },
    /// List the planted defects
    Findings {
        /// Restrict to one fixture (cart, users, api)
        #[arg(long)]
        fixture: Option<String>,
    },
    /// Every scenario in order
    All,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::Config::from_env()?;
    init_tracing(&cfg);
    info!("{}", fixtures::about());

    match cli.command.unwrap_or(Command::All) {
        Command::Cart => emit(cli.json, scenarios::run_cart().as_slice(), print_cart),
        Command::Users => emit(cli.json, scenarios::run_users().as_slice(), print_users),
        Command::Api { user_id, search } => {
            let user_id = user_id.unwrap_or(cfg.default_user_id);
            let search = search.unwrap_or(cfg.default_search);
            let report = scenarios::run_api(&user_id, &search)
                .await
                .context("api scenario failed")?;
            emit(cli.json, &report, print_api)
        }
        Command::Findings { fixture } => {
            let findings = match fixture {
                Some(name) => findings_for(
                    Fixture::parse(&name)
                        .with_context(|| format!("expected one of: {}", fixture_names()))?,
                ),
                None => catalog(),
            };
            emit(cli.json, findings.as_slice(), print_findings)
        }
        Command::All => {
            let report = FullReport {
                cart: scenarios::run_cart(),
                verified_users: scenarios::run_users(),
                api: scenarios::run_api(&cfg.default_user_id, &cfg.default_search)
                    .await
                    .context("api scenario failed")?,
                findings: catalog(),
            };
            emit(cli.json, &report, print_all)
        }
    }
}

fn fixture_names() -> String {
    Fixture::ALL
        .iter()
        .map(Fixture::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: fn(&T)) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("serialize report")?;
        println!("{}", out);
    } else {
        text(value);
    }
    Ok(())
}

fn print_cart(steps: &[CartStep]) {
    println!("== cart");
    for step in steps {
        println!("{}", step.action);
        for item in &step.items {
            println!(
                "  {:<8} {:<10} {:>8.2} x {:>3}",
                item.id, item.name, item.price, item.quantity
            );
        }
        println!("  total: {:.2}", step.total);
    }
}

fn print_users(users: &[User]) {
    println!("== verified users");
    for user in users {
        println!("  {:<20} {} ({})", user.email, user.name, user.created_at.date_naive());
    }
}

fn print_api(report: &ApiReport) {
    println!("== vulnerable api");
    println!("  user id:     {}", report.user_id);
    println!("  search term: {}", report.search_term);
    println!(
        "  get_user:    {}",
        report
            .get_user
            .as_ref()
            .map_or_else(|| "none".to_string(), |u| u.email.clone())
    );
    println!("  search hits: {}", report.search_results.len());
    println!("  statements:");
    for sql in &report.statements {
        println!("    {}", sql);
    }
}

fn print_findings(findings: &[Finding]) {
    println!("== findings");
    for f in findings {
        let note = if f.reproducible { "" } else { " [comment only]" };
        println!(
            "  {:<9} {:<8} {:<15} {}{}",
            f.code,
            f.detectability.as_str(),
            f.fixture.as_str(),
            f.title,
            note
        );
        println!("            at {}", f.location);
    }
}

fn print_all(report: &FullReport) {
    print_cart(&report.cart);
    print_users(&report.verified_users);
    print_api(&report.api);
    print_findings(&report.findings);
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["demo-runner"]).unwrap();
        assert!(!cli.json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_api_flags() {
        let cli = Cli::try_parse_from([
            "demo-runner",
            "api",
            "--user-id",
            "1 OR 1=1",
            "--search",
            "bob",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Command::Api { user_id, search }) => {
                assert_eq!(user_id.as_deref(), Some("1 OR 1=1"));
                assert_eq!(search.as_deref(), Some("bob"));
            }
            other => panic!("expected api command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_findings_filter() {
        let cli = Cli::try_parse_from(["demo-runner", "findings", "--fixture", "cart"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Findings { fixture: Some(ref f) }) if f == "cart"
        ));
    }

    #[test]
    fn fixture_names_lists_every_fixture() {
        assert_eq!(fixture_names(), "cart, user_listing, vulnerable_api");
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["demo-runner", "checkout"]).is_err());
    }
}
