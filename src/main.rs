use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fox_rulegen::{
    DEFAULT_OUTPUT_PATH, PipelineConfig, SubstitutionRule, default_rules, load_rules_file,
    run_pipeline,
};

#[derive(Parser)]
#[command(name = "fox-rulegen")]
#[command(author, version, about = "FoxReplace substitution rule generator", long_about = None)]
struct Cli {
    /// Defaults to `generate` with its default arguments
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand rule declarations and write the FoxReplace rule document
    Generate {
        /// Rule declarations (JSON); defaults to the built-in catalogue
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output file, replaced on success
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Also print the generated document to stdout
        #[arg(long)]
        print: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report how each rule expands without writing anything
    Analyze {
        /// Rule declarations (JSON); defaults to the built-in catalogue
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Cli {
    fn into_command(self) -> Commands {
        self.command.unwrap_or_else(|| Commands::Generate {
            rules: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print: false,
            verbose: false,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Generate {
            rules,
            output,
            print,
            verbose,
        } => {
            setup_logging(verbose);
            generate(rules.as_deref(), &output, print)
        }
        Commands::Analyze { rules, verbose } => {
            setup_logging(verbose);
            analyze(rules.as_deref())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_rules(path: Option<&Path>) -> Result<Vec<SubstitutionRule>> {
    match path {
        Some(path) => {
            info!("Loading rules from {:?}", path);
            load_rules_file(path)
        }
        None => {
            info!("Using built-in rule catalogue");
            Ok(default_rules())
        }
    }
}

fn generate(rules_path: Option<&Path>, output: &Path, print: bool) -> Result<()> {
    let rules = load_rules(rules_path)?;
    info!("Generating replacement rules from {} declarations...", rules.len());

    let result =
        run_pipeline(&rules, &PipelineConfig::default()).context("Failed to expand rules")?;
    let document = result.into_document();

    document.write_json(output)?;
    info!(
        "Wrote {} groups ({} substitutions) to {:?}",
        document.groups.len(),
        document.leaf_count(),
        output
    );

    if print {
        println!("{}", document.to_json_string()?);
    }

    Ok(())
}

fn analyze(rules_path: Option<&Path>) -> Result<()> {
    let rules = load_rules(rules_path)?;
    let result =
        run_pipeline(&rules, &PipelineConfig::default()).context("Failed to expand rules")?;

    println!("Rule Expansion");
    println!("==============");
    for expansion in &result.expansions {
        println!(
            "{}: {} atomic rules, {} phase 1 leaves, {} phase 2 leaves",
            expansion.name, expansion.atomic_rules, expansion.phase1_leaves, expansion.phase2_leaves
        );
    }
    println!();

    let phase1: usize = result.expansions.iter().map(|e| e.phase1_leaves).sum();
    let phase2: usize = result.expansions.iter().map(|e| e.phase2_leaves).sum();
    let routed = result.expansions.iter().filter(|e| e.phase2_leaves > 0).count();

    println!("Totals");
    println!("------");
    println!("Rules: {}", rules.len());
    println!("Token-routed rules: {}", routed);
    println!("Phase 1 groups: {}", result.phase1.len());
    println!("Phase 2 groups: {}", result.phase2.len());
    println!("Substitutions: {} ({} phase 1, {} phase 2)", phase1 + phase2, phase1, phase2);

    Ok(())
}
