//! meander — entry point for running a token transmigration.

use anyhow::Context;
use clap::Parser;
use meander_audit::{severance_violations, verify_chain_severance, AuditCollector};
use meander_engine::{Orchestrator, RunConfig, RunOutcome};
use meander_env::{Env, FanoutSink, SeededEntropy, TracingSink};
use meander_utils::format_duration_ms;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "meander", about = "Multi-hop bearer token transmigration simulator")]
struct Cli {
    /// Number of redeem+mint hops.
    #[arg(long, env = "MEANDER_HOPS")]
    hops: Option<u32>,

    /// Number of simulated mints in the vendor pool.
    #[arg(long, env = "MEANDER_MINTS")]
    mints: Option<usize>,

    /// Amount minted at the seed vendor.
    #[arg(long, env = "MEANDER_AMOUNT")]
    amount: Option<u64>,

    /// Provenance tag for the seed mint operation.
    #[arg(long, env = "MEANDER_SOURCE_TAG")]
    source_tag: Option<String>,

    /// Seed for deterministic vendor identities and hop selection.
    /// Omit for a non-deterministic run.
    #[arg(long, env = "MEANDER_SEED")]
    seed: Option<u64>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the append-mode run log, in addition to console logging.
    #[arg(long, env = "MEANDER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Print the run outcome as JSON instead of the human-readable report.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.log_dir {
        Some(dir) => meander_utils::init_tracing_with_file(dir)
            .with_context(|| format!("opening log dir {}", dir.display()))?,
        None => meander_utils::init_tracing(),
    }

    let file_config: Option<RunConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match RunConfig::from_toml_str(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(hops) = cli.hops {
        config.num_hops = hops;
    }
    if let Some(mints) = cli.mints {
        config.pool_size = mints;
    }
    if let Some(amount) = cli.amount {
        config.source_amount = amount;
    }
    if let Some(tag) = cli.source_tag {
        config.source_tag = tag;
    }

    tracing::info!(
        hops = config.num_hops,
        mints = config.pool_size,
        amount = config.source_amount,
        "configuration loaded"
    );

    let collector = Arc::new(AuditCollector::new());
    let mut env = Env::system().with_sink(Arc::new(FanoutSink::new(vec![
        Arc::new(TracingSink),
        collector.clone(),
    ])));
    if let Some(seed) = cli.seed {
        tracing::info!(seed, "using deterministic entropy");
        env = env.with_entropy(Arc::new(SeededEntropy::new(seed)));
    }

    let mut orchestrator = Orchestrator::new(config, env)?;
    let started = std::time::Instant::now();
    let outcome = orchestrator.run().await?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_report(&outcome, elapsed_ms, collector.as_ref());
    }

    if !verify_chain_severance(&outcome.trail) {
        for violation in severance_violations(&outcome.trail) {
            tracing::error!(%violation, "severance check failed");
        }
        anyhow::bail!("custody chain severance verification failed");
    }

    tracing::info!("transmigration run complete");
    Ok(())
}

fn print_report(outcome: &RunOutcome, elapsed_ms: u64, collector: &AuditCollector) {
    let trail = &outcome.trail;

    println!("=== Transmigration Report ===");
    println!("Hops completed: {}", trail.len());
    println!("Elapsed: {}", format_duration_ms(elapsed_ms));
    println!(
        "Seed token:  {} ({} units at mint {})",
        trail.seed.id.short(),
        trail.seed.amount,
        trail.seed.issuing_mint.short()
    );
    println!(
        "Final token: {} ({} units at mint {})",
        trail.final_token.id.short(),
        trail.final_token.amount,
        trail.final_token.issuing_mint.short()
    );
    println!(
        "Severance:   {}",
        if verify_chain_severance(trail) {
            "verified"
        } else {
            "VIOLATED"
        }
    );

    println!();
    println!("Hop trail:");
    for hop in &trail.hops {
        println!(
            "  {:>3}. {} -> {}  token {} -> {}  ({})",
            hop.hop_number,
            hop.source_mint.short(),
            hop.destination_mint.short(),
            hop.token_before.id.short(),
            hop.token_after.id.short(),
            format_duration_ms(hop.duration_ms())
        );
    }

    println!();
    println!(
        "Vendor statistics ({} vendors, {} operations observed):",
        outcome.mint_stats.len(),
        collector.total_operations()
    );
    for stats in &outcome.mint_stats {
        if stats.minted_count == 0 && stats.redeemed_count == 0 {
            continue;
        }
        println!(
            "  {:<12} minted {:>3} ({} units)  redeemed {:>3} ({} units)",
            stats.display_name,
            stats.minted_count,
            stats.total_value_minted,
            stats.redeemed_count,
            stats.total_value_redeemed
        );
    }
}
