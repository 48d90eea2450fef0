use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use rapport_core::config::{CliOverrides, RapportConfig};
use rapport_core::tracing::init_tracing;
use rapport_session::open_session;

mod report;
mod script;

/// Rapport: trust estimation for human collaborators
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: rapport.toml in the working directory, if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory holding user profiles and audit logs
    #[arg(long, value_name = "DIR", global = true)]
    profile_dir: Option<PathBuf>,

    /// Log level for rapport targets (overridden by RAPPORT_LOG)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Do not append to the audit log
    #[arg(long, global = true)]
    no_audit: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's stored trust state
    Show {
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the cooperation probability for a user
    Probability { user: String },

    /// Update a user's profile values
    Set {
        user: String,
        /// Expected response time in minutes
        #[arg(long)]
        response_time: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        attitude: Option<f64>,
        /// Initial kinship in [0, 1]
        #[arg(long)]
        kinship: Option<f64>,
        /// Predictor threshold in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,
        /// Overwrite the positive experience count
        #[arg(long)]
        positive: Option<u32>,
        /// Overwrite the negative experience count
        #[arg(long)]
        negative: Option<u32>,
    },

    /// Run a mission script and finalize the mission
    Run {
        /// TOML mission script
        script: PathBuf,
        /// User to run as (overrides the script's `user`)
        #[arg(short, long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        profile_dir: cli.profile_dir.clone(),
        log_level: cli.log_level.clone(),
        no_audit: cli.no_audit,
    };
    let root = std::env::current_dir().context("cannot determine working directory")?;
    let config = RapportConfig::load(&root, cli.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;
    init_tracing(&config.observability);

    match cli.command {
        Commands::Show { user, json } => {
            let session = open_session(&config, &user)?;
            if json {
                let state = report::StateReport::new(&session);
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", report::render_state(&session));
            }
        }
        Commands::Probability { user } => {
            let session = open_session(&config, &user)?;
            println!("{}", session.cooperation_probability());
        }
        Commands::Set {
            user,
            response_time,
            attitude,
            kinship,
            threshold,
            positive,
            negative,
        } => {
            let updates = script::SetupValues {
                response_time,
                attitude,
                initial_kinship: kinship,
                predictor_threshold: threshold,
                positive_count: positive,
                negative_count: negative,
            };
            if updates.is_empty() {
                bail!("nothing to set: pass at least one value option");
            }

            let mut session = open_session(&config, &user)?;
            updates.apply(&mut session)?;
            print!("{}", report::render_state(&session));
        }
        Commands::Run {
            script: script_path,
            user,
            json,
        } => {
            let mission = script::MissionScript::from_file(&script_path)?;
            let user = match user.or_else(|| mission.user.clone()) {
                Some(user) => user,
                None => bail!(
                    "no user given: pass --user or set `user` in {}",
                    script_path.display()
                ),
            };

            let mut session = open_session(&config, &user)?;
            let outcome = mission.execute(&mut session)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", report::render_outcome(&outcome));
            }
        }
    }

    Ok(())
}
