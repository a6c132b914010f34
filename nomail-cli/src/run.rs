//! Run orchestration and reporting.
//!
//! Domains are processed strictly sequentially in file order. One domain's
//! prompts or errors never affect another's; only configuration errors (not
//! handled here) abort the whole run.

use colored::Colorize;
use nomail_provider::DnsProvider;

use crate::audit::{AuditAction, AuditLog};
use crate::confirm::Confirm;
use crate::policy::RecordKind;
use crate::reconcile::{Reconciler, RecordOutcome};

/// Final classification of one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    Successful,
    Failed(String),
    Skipped,
}

/// Accumulated per-domain outcomes, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub successful: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub skipped: Vec<String>,
}

impl RunReport {
    fn record(&mut self, domain: &str, outcome: DomainOutcome) {
        match outcome {
            DomainOutcome::Successful => self.successful.push(domain.to_string()),
            DomainOutcome::Failed(reason) => self.failed.push((domain.to_string(), reason)),
            DomainOutcome::Skipped => self.skipped.push(domain.to_string()),
        }
    }

    fn total(&self) -> usize {
        self.successful.len() + self.failed.len() + self.skipped.len()
    }

    /// Print the categorized summary and the closing status line.
    pub fn print_summary(&self) {
        println!();
        println!("{}", "summary".bold());
        println!(
            "  {} {}",
            format!("successful ({}):", self.successful.len()).green(),
            self.successful.join(", ")
        );
        println!(
            "  {} {}",
            format!("failed ({}):", self.failed.len()).red(),
            self.failed
                .iter()
                .map(|(domain, reason)| format!("{domain} ({reason})"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "  {} {}",
            format!("skipped ({}):", self.skipped.len()).yellow(),
            self.skipped.join(", ")
        );
        println!();

        if !self.failed.is_empty() {
            println!(
                "{}",
                format!("{} domain(s) failed; see the audit log.", self.failed.len())
                    .red()
                    .bold()
            );
        } else if self.successful.len() == self.total() && self.total() > 0 {
            println!(
                "{}",
                format!("All {} domain(s) hardened.", self.successful.len())
                    .green()
                    .bold()
            );
        } else {
            println!("{}", "Run complete; some domains were skipped.".yellow());
        }
    }
}

pub struct Runner<'a> {
    provider: &'a dyn DnsProvider,
    confirm: &'a dyn Confirm,
    audit: AuditLog,
}

impl<'a> Runner<'a> {
    pub fn new(provider: &'a dyn DnsProvider, confirm: &'a dyn Confirm, audit: AuditLog) -> Self {
        Self {
            provider,
            confirm,
            audit,
        }
    }

    /// Process every domain in order and return the aggregated report.
    pub async fn run(&mut self, domains: &[String]) -> RunReport {
        let mut report = RunReport::default();
        for domain in domains {
            let outcome = self.process_domain(domain).await;
            report.record(domain, outcome);
        }
        report
    }

    /// One domain: zone lookup, then SPF -> MX -> DMARC.
    ///
    /// Aggregation precedence: any per-record Skipped makes the domain
    /// Skipped; otherwise any error makes it Failed; otherwise Successful.
    /// An error aborts the remaining record kinds for this domain only.
    async fn process_domain(&mut self, domain: &str) -> DomainOutcome {
        println!("{}", domain.bold());

        let zone = match self.provider.find_zone(domain).await {
            Ok(Some(zone)) => zone,
            Ok(None) => {
                println!("  {}", "zone not found".red());
                self.audit
                    .record(domain, "ZONE", AuditAction::Failed, Some("zone not found"));
                return DomainOutcome::Failed("zone not found".to_string());
            }
            Err(e) => {
                println!("  {} {e}", "zone lookup failed:".red());
                self.audit
                    .record(domain, "ZONE", AuditAction::Failed, Some(&e.to_string()));
                return DomainOutcome::Failed(e.to_string());
            }
        };

        let reconciler = Reconciler::new(self.provider, self.confirm);
        let mut skipped = false;
        let mut failure: Option<String> = None;

        for kind in [RecordKind::Spf, RecordKind::NullMx, RecordKind::Dmarc] {
            match reconciler.reconcile(kind, &zone, &mut self.audit).await {
                Ok(RecordOutcome::Applied) => {
                    println!("  {:<5} {}", kind.tag(), "applied".green());
                }
                Ok(RecordOutcome::AlreadyCorrect) => {
                    println!("  {:<5} {}", kind.tag(), "already correct".green());
                }
                Ok(RecordOutcome::Skipped) => {
                    println!("  {:<5} {}", kind.tag(), "skipped (declined)".yellow());
                    skipped = true;
                }
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("{domain}: {} reconciliation failed: {e}", kind.tag());
                    } else {
                        log::error!("{domain}: {} reconciliation failed: {e}", kind.tag());
                    }
                    println!("  {:<5} {}", kind.tag(), format!("failed: {e}").red());
                    self.audit
                        .record(domain, kind.tag(), AuditAction::Failed, Some(&e.to_string()));
                    failure = Some(e.to_string());
                    break;
                }
            }
        }

        if skipped {
            DomainOutcome::Skipped
        } else if let Some(reason) = failure {
            DomainOutcome::Failed(reason)
        } else {
            DomainOutcome::Successful
        }
    }
}
