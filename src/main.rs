//! ironplan - barbell workout generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ironplan::exercises::find_exercise;
use ironplan::notes::format_notes;
use ironplan::render::{render_catalog, render_json, render_text};
use ironplan::{PlannerConfig, Selections, WorkoutPlanner};

#[derive(Parser)]
#[command(name = "ironplan")]
#[command(author, version, about = "Barbell strength workout generator")]
struct Cli {
    /// Offered session lengths in minutes
    #[arg(long, global = true, env = "IRONPLAN_DURATIONS", value_delimiter = ',')]
    durations: Option<Vec<u32>>,

    /// Fixed seed for reproducible plans
    #[arg(long, global = true, env = "IRONPLAN_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout
    Plan {
        /// Session length in minutes (e.g. 30, 45, 60, 90)
        #[arg(short, long)]
        duration: Option<u32>,

        /// beginner, intermediate or advanced
        #[arg(short, long)]
        experience: Option<String>,

        /// strength, hypertrophy or powerlifting
        #[arg(short, long)]
        goal: Option<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the exercise catalog
    Catalog,

    /// Show one catalog entry by key (e.g. "squat", "facePulls")
    Show { key: String },

    /// Show the research notes
    Notes,

    /// Print the effective planner configuration
    Config,
}

impl Cli {
    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = PlannerConfig::default().with_seed(self.seed);
        if let Some(durations) = &self.durations {
            config = config.with_durations(durations.clone());
        }
        config.validated().context("invalid planner configuration")
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Plan { duration, experience, goal, json } => {
            let selections =
                Selections::from_labels(*duration, experience.as_deref(), goal.as_deref())?;
            let mut planner = WorkoutPlanner::from_config(cli.planner_config()?)?;
            let plan = planner
                .plan_selections(&selections)
                .context("cannot generate workout")?;

            if *json {
                println!("{}", render_json(&plan)?);
            } else {
                println!("{}", render_text(&plan));
            }
        }

        Commands::Catalog => println!("{}", render_catalog()),

        Commands::Show { key } => {
            let (category, exercise) =
                find_exercise(key).with_context(|| format!("no exercise with key '{}'", key))?;
            println!("{} ({})", exercise.name, category);
            println!("Muscles: {}", exercise.primary_muscles.join(", "));
            println!("{}", exercise.notes);
        }

        Commands::Notes => println!("{}", format_notes()),

        Commands::Config => {
            let config = cli.planner_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
