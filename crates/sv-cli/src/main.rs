mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use sv_core::{
    Constants, Entity, ScaleCategory, ScaleEvaluator, ScaleModel, Sweep, SweepRecord,
    available_work, canonical_entities, export_json, market_stability, resolve_work,
};
use sv_store::{RunArchive, SweepProfile};

#[derive(Parser)]
#[command(name = "sv", about = "Synthetic-physics scale evaluator")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep a model's reference and alternative curves
    Sweep {
        /// Model preset: galactic-rotation, pioneer-anomaly, wide-binary
        #[arg(long, conflicts_with = "profile")]
        model: Option<String>,

        /// Lower sweep bound (defaults to the model's canonical range)
        #[arg(long)]
        from: Option<f64>,

        /// Upper sweep bound (defaults to the model's canonical range)
        #[arg(long)]
        to: Option<f64>,

        /// Number of sample points
        #[arg(long, default_value_t = 100)]
        count: usize,

        /// Load model, bounds and constants from a TOML profile
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Emit the full record as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Archive the run
        #[arg(long)]
        save: bool,
    },

    /// Classify entities on the universal scale axis
    Validate {
        /// Entity name
        #[arg(long, requires = "mass", requires = "radius")]
        name: Option<String>,

        /// Entity mass (kg)
        #[arg(long)]
        mass: Option<f64>,

        /// Entity radius (m)
        #[arg(long)]
        radius: Option<f64>,

        /// Scale band label: micro, macro, planetary, cosmic
        #[arg(long, default_value = "macro")]
        category: String,

        /// Analyze the four canonical entities instead
        #[arg(long, conflicts_with_all = ["name", "mass", "radius"])]
        demo: bool,
    },

    /// Check whether a work requirement collapses to reality
    Resolve {
        /// Name of the system being resolved
        name: String,

        /// Required work
        #[arg(long)]
        work: f64,
    },

    /// Check a price against its underlying value
    Stability {
        #[arg(long)]
        price: f64,

        #[arg(long)]
        value: f64,
    },

    /// List archived runs
    Runs {
        /// Emit the listing as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render one archived run
    Show {
        id: Uuid,

        /// Emit the record as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export an archived run to a JSON file
    Export { id: Uuid, path: PathBuf },

    /// Import a run from a JSON file
    Import { path: PathBuf },
}

fn open_archive() -> Result<RunArchive> {
    let base_dir = std::env::var("SV_DATA_DIR").ok().map(PathBuf::from);
    RunArchive::open(base_dir.as_deref()).context("failed to open run archive")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Sweep {
            model,
            from,
            to,
            count,
            profile,
            json,
            save,
        } => cmd_sweep(
            model.as_deref(),
            *from,
            *to,
            *count,
            profile.as_deref(),
            *json,
            *save,
        ),
        Commands::Validate {
            name,
            mass,
            radius,
            category,
            demo,
        } => cmd_validate(name.as_deref(), *mass, *radius, category, *demo),
        Commands::Resolve { name, work } => cmd_resolve(name, *work),
        Commands::Stability { price, value } => cmd_stability(*price, *value),
        Commands::Runs { json } => cmd_runs(*json),
        Commands::Show { id, json } => cmd_show(*id, *json),
        Commands::Export { id, path } => cmd_export(*id, path),
        Commands::Import { path } => cmd_import(path),
    }
}

fn parse_model(name: &str) -> Result<ScaleModel> {
    ScaleModel::from_name(name).with_context(|| {
        let known: Vec<&str> = ScaleModel::ALL.iter().map(|m| m.as_str()).collect();
        format!("unknown model '{name}' (expected one of: {})", known.join(", "))
    })
}

fn cmd_sweep(
    model: Option<&str>,
    from: Option<f64>,
    to: Option<f64>,
    count: usize,
    profile: Option<&std::path::Path>,
    json: bool,
    save: bool,
) -> Result<()> {
    let (model, constants, sweep) = if let Some(path) = profile {
        let profile = SweepProfile::from_path(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?;
        let model = profile.model()?;
        let sweep = Sweep::new(profile.lower, profile.upper, profile.count)?;
        (model, profile.constants(), sweep)
    } else {
        let Some(name) = model else {
            bail!("either --model or --profile is required");
        };
        let model = parse_model(name)?;
        let (default_from, default_to) = model.default_range();
        let sweep = Sweep::new(
            from.unwrap_or(default_from),
            to.unwrap_or(default_to),
            count,
        )?;
        (model, Constants::default(), sweep)
    };

    let evaluator = ScaleEvaluator::new(constants, model)?;
    let record = SweepRecord::capture(&evaluator, &sweep);
    tracing::debug!(
        "swept {} over [{}, {}]: {}/{} ok",
        model.as_str(),
        sweep.lower(),
        sweep.upper(),
        record.ok_count(),
        record.samples.len()
    );

    if json {
        println!("{}", export_json(&record).context("failed to serialize record")?);
    } else {
        print!("{}", report::render_sweep_table(&record));
    }

    if save {
        let archive = open_archive()?;
        let id = archive
            .store()
            .save_run(&record)
            .context("failed to archive run")?;
        println!("archived run {id}");
    }

    Ok(())
}

fn cmd_validate(
    name: Option<&str>,
    mass: Option<f64>,
    radius: Option<f64>,
    category: &str,
    demo: bool,
) -> Result<()> {
    let entities = if demo {
        canonical_entities()
    } else {
        let (Some(name), Some(mass), Some(radius)) = (name, mass, radius) else {
            bail!("provide --name, --mass and --radius, or use --demo");
        };
        vec![Entity::new(
            name,
            mass,
            radius,
            ScaleCategory::from_str_lossy(category),
        )]
    };

    let constants = Constants::default();
    for entity in &entities {
        let report = entity.report(&constants);
        print!("{}", report::render_entity(entity, &report));
    }
    Ok(())
}

fn cmd_resolve(name: &str, work: f64) -> Result<()> {
    let constants = Constants::default();
    let state = resolve_work(work, constants.s);
    print!(
        "{}",
        report::render_resolution(name, work, available_work(constants.s), state)
    );
    Ok(())
}

fn cmd_stability(price: f64, value: f64) -> Result<()> {
    let (dp, stability) = market_stability(price, value).context("stability check failed")?;
    print!("{}", report::render_stability(price, value, dp, stability));
    Ok(())
}

fn cmd_runs(json: bool) -> Result<()> {
    let archive = open_archive()?;
    let runs = archive.store().list_runs().context("failed to list runs")?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&runs).context("failed to serialize listing")?
        );
    } else {
        print!("{}", report::render_run_list(&runs));
    }
    Ok(())
}

fn cmd_show(id: Uuid, json: bool) -> Result<()> {
    let archive = open_archive()?;
    let record = archive
        .store()
        .load_run(id)
        .with_context(|| format!("failed to load run {id}"))?;
    if json {
        println!("{}", export_json(&record).context("failed to serialize record")?);
    } else {
        print!("{}", report::render_sweep_table(&record));
    }
    Ok(())
}

fn cmd_export(id: Uuid, path: &std::path::Path) -> Result<()> {
    let archive = open_archive()?;
    archive
        .export_json_file(id, path)
        .with_context(|| format!("failed to export run {id}"))?;
    println!("exported {id} to {}", path.display());
    Ok(())
}

fn cmd_import(path: &std::path::Path) -> Result<()> {
    let archive = open_archive()?;
    let id = archive
        .import_json_file(path)
        .with_context(|| format!("failed to import {}", path.display()))?;
    println!("imported {} as run {id}", path.display());
    Ok(())
}
