//! `nomail` entry point.
//!
//! One-shot batch run: load configuration and the domain list, reconcile the
//! anti-mail record set for every domain in file order, print the summary,
//! and leave an audit log behind. Exit code is zero after any completed run;
//! only configuration-phase errors exit non-zero.

mod audit;
mod config;
mod confirm;
mod domains;
mod policy;
mod reconcile;
mod run;

#[cfg(test)]
mod test_utils;

use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use nomail_provider::CloudflareProvider;

use crate::audit::AuditLog;
use crate::config::Config;
use crate::confirm::TerminalConfirm;
use crate::run::Runner;

#[tokio::main]
async fn main() -> ExitCode {
    // A local .env is optional; the real environment wins.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run_batch().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "fatal:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run_batch() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let domains = domains::load_domains(&config.domains_file)?;
    if domains.is_empty() {
        println!(
            "{} no domains in {}",
            "nothing to do:".yellow(),
            config.domains_file.display()
        );
        return Ok(());
    }

    let audit = AuditLog::create(&config.log_path)
        .with_context(|| format!("cannot open audit log {}", config.log_path.display()))?;
    let provider = CloudflareProvider::new(config.api_token.clone());
    let confirm = TerminalConfirm;

    let mut runner = Runner::new(&provider, &confirm, audit);
    let report = runner.run(&domains).await;

    report.print_summary();
    println!("audit log: {}", config.log_path.display());
    Ok(())
}
