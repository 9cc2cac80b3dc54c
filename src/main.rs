//! Perihelion - Coherence-Corrected Orbital Precession
//!
//! Command-line front end: evaluates catalogs and single bodies, compares
//! strong-field orbits against GR, and samples the galactic and
//! large-scale-structure models.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use perihelion::catalog::{self, BodyCatalog};
use perihelion::coherence::{presets, Preset, DEFAULT_PRESET, PRESETS};
use perihelion::galaxy::{self, ExponentialDisk};
use perihelion::precession::{
    apply_policy, BatchEntryError, BatchPolicy, OrbitalParameters, PrecessionModel,
};
use perihelion::relativity::{self, S2_SGR_A};
use perihelion::report::{self, chart};
use perihelion::structure::{self, CoherenceField, FieldNoise, HER_CRB_REDSHIFT};

#[derive(Parser)]
#[command(name = "perihelion", version)]
#[command(about = "Coherence-corrected perihelion precession calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Drop invalid bodies and keep going
    Skip,
    /// Stop at the first invalid body
    Abort,
}

impl From<Policy> for BatchPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Skip => BatchPolicy::SkipInvalid,
            Policy::Abort => BatchPolicy::AbortOnFirstError,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the available constant presets
    Presets,

    /// Evaluate a built-in or JSON body catalog
    Catalog {
        /// Built-in catalog id
        #[arg(long, conflicts_with = "file")]
        catalog: Option<String>,

        /// JSON catalog file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Preset id (defaults to the catalog's own preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Force the coherence-factor refinement on
        #[arg(long, conflicts_with = "unrefined")]
        refined: bool,

        /// Force the coherence-factor refinement off
        #[arg(long)]
        unrefined: bool,

        /// What to do with invalid bodies
        #[arg(long, value_enum, default_value_t = Policy::Abort)]
        policy: Policy,

        /// Write a bar chart of the corrected values (SVG)
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Evaluate a single body
    Body {
        /// Semi-major axis (AU)
        #[arg(short, long, allow_negative_numbers = true)]
        a: f64,

        /// Eccentricity
        #[arg(short, long, allow_negative_numbers = true)]
        e: f64,

        /// Baseline precession to correct (e.g. GR, arcsec/century)
        #[arg(short, long, allow_negative_numbers = true)]
        reference: Option<f64>,

        #[arg(short, long)]
        preset: Option<String>,

        /// Write a reference / alpha-only / corrected bar chart (SVG)
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Compare star S2 around Sgr A* against its GR precession
    Star {
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Sample a galactic rotation curve
    Rotation {
        #[arg(long, default_value = "400")]
        samples: usize,

        #[arg(long, default_value = "0.2")]
        r_min: f64,

        #[arg(long, default_value = "30")]
        r_max: f64,

        #[arg(short, long, default_value = "galactic")]
        preset: String,

        /// Write the Newtonian / coherent / observed curves (SVG)
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Sample the filament coherence field and structure growth
    Structure {
        #[arg(long, default_value = "200")]
        resolution: usize,

        #[arg(long, default_value = "2.0")]
        extent: f64,

        /// Noise seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Disable background noise
        #[arg(long)]
        no_noise: bool,

        /// Write the ΛCDM / coherent growth curves (SVG)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Write a heat map of the coherence field (SVG)
        #[arg(long)]
        field_chart: Option<PathBuf>,
    },
}

fn resolve_preset(id: Option<&str>) -> Result<&'static Preset> {
    Ok(match id {
        Some(id) => presets::find(id)?,
        None => DEFAULT_PRESET,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => {
            println!(
                "{:<20} {:>7} {:>5} {:>11} {:>8}  Description",
                "Preset", "k", "n", "rs (AU)", "refined"
            );
            for preset in PRESETS {
                let marker = if preset.id == DEFAULT_PRESET.id { "*" } else { "" };
                println!(
                    "{:<20} {:>7} {:>5} {:>11} {:>8}  {}",
                    format!("{}{marker}", preset.id),
                    preset.constants.k,
                    preset.constants.n,
                    preset.constants.rs,
                    preset.refined,
                    preset.description
                );
            }
        }

        Commands::Catalog {
            catalog,
            file,
            preset,
            refined,
            unrefined,
            policy,
            chart: chart_path,
        } => {
            let body_catalog = match file {
                Some(path) => BodyCatalog::load(&path)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?,
                None => catalog::builtin(catalog.as_deref().unwrap_or("solar-system"))?,
            };
            let preset = match preset {
                Some(id) => presets::find(&id)?,
                None => body_catalog.preset()?,
            };

            let mut model = PrecessionModel::from_preset(preset);
            if refined || unrefined {
                model = model.with_refinement(refined);
            }
            info!(
                catalog = %body_catalog.name,
                preset = preset.id,
                refined = model.refined,
                bodies = body_catalog.bodies.len(),
                "Evaluating catalog"
            );

            let evaluations =
                apply_policy(model.evaluate_catalog(&body_catalog), policy.into())?;
            let has_reference = evaluations.iter().any(|e| e.result.reference.is_some());
            let rows: Vec<Result<_, BatchEntryError>> =
                evaluations.iter().cloned().map(Ok).collect();

            println!("{} ({})\n", body_catalog.name, preset.name);
            if has_reference {
                println!("{}", report::precession_table(&rows));
            } else {
                println!("{}", report::alpha_table(&rows));
            }

            if let Some(path) = chart_path {
                if evaluations.is_empty() {
                    warn!("No bodies left to plot, skipping chart");
                    return Ok(());
                }
                let bars: Vec<_> = evaluations
                    .iter()
                    .map(|e| {
                        let value = e.result.corrected_value.unwrap_or(e.result.alpha);
                        chart::Bar::new(e.name.clone(), value)
                    })
                    .collect();
                let y_label = if has_reference { "corrected value" } else { "alpha" };
                chart::bar_chart_svg(&bars, &path, &body_catalog.name, y_label)?;
                info!("Chart written to {}", path.display());
            }
        }

        Commands::Body {
            a,
            e,
            reference,
            preset,
            chart: chart_path,
        } => {
            let preset = resolve_preset(preset.as_deref())?;
            let mut params = OrbitalParameters::new(a, e);
            if let Some(reference) = reference {
                params = params.with_reference(reference);
            }

            let result = PrecessionModel::from_preset(preset).compute(&params)?;
            println!(
                "{}",
                report::breakdown(&format!("a = {a} AU, e = {e} ({})", preset.name), &result)
            );

            if let Some(path) = chart_path {
                match (result.reference, result.alpha_only_value(), result.corrected_value) {
                    (Some(reference), Some(alpha_only), Some(corrected)) => {
                        let bars = [
                            chart::Bar::new("reference", reference),
                            chart::Bar::new("alpha only", alpha_only),
                            chart::Bar::new("corrected", corrected),
                        ];
                        chart::bar_chart_svg(&bars, &path, "Perihelion precession", "value")?;
                        info!("Chart written to {}", path.display());
                    }
                    _ => warn!("No reference given, skipping chart"),
                }
            }
        }

        Commands::Star { preset } => {
            let preset = resolve_preset(preset.as_deref())?;
            let precession =
                relativity::evaluate_star(&S2_SGR_A, &preset.constants, preset.refined)?;
            println!("{}", report::star_summary(&S2_SGR_A, &precession));
        }

        Commands::Rotation {
            samples,
            r_min,
            r_max,
            preset,
            chart: chart_path,
        } => {
            let preset = presets::find(&preset)?;
            let disk = ExponentialDisk::default();
            let curve = galaxy::rotation_curve(&disk, &preset.constants, r_min, r_max, samples)?;

            println!(
                "{:>8} {:>12} {:>10} {:>10} {:>10}",
                "r (kpc)", "M (Msun)", "Newton", "coherent", "observed"
            );
            let step = (curve.len() / 10).max(1);
            for sample in curve.iter().step_by(step) {
                println!(
                    "{:>8.2} {:>12.3e} {:>10.1} {:>10.1} {:>10.1}",
                    sample.r_kpc,
                    sample.enclosed_mass_msun,
                    sample.newtonian,
                    sample.coherent,
                    sample.observed_mock
                );
            }

            if let Some(path) = chart_path {
                let series = [
                    chart::Series::new(
                        "Newtonian",
                        curve.iter().map(|s| (s.r_kpc, s.newtonian)).collect(),
                    ),
                    chart::Series::new(
                        "Coherent",
                        curve.iter().map(|s| (s.r_kpc, s.coherent)).collect(),
                    ),
                    chart::Series::new(
                        "Observed (mock)",
                        curve.iter().map(|s| (s.r_kpc, s.observed_mock)).collect(),
                    ),
                ];
                chart::line_chart_svg(
                    &series,
                    &path,
                    "Galactic rotation curve",
                    "r (kpc)",
                    "v (km/s)",
                )?;
                info!("Chart written to {}", path.display());
            }
        }

        Commands::Structure {
            resolution,
            extent,
            seed,
            no_noise,
            chart: chart_path,
            field_chart,
        } => {
            let noise = (!no_noise).then(|| FieldNoise {
                seed,
                ..FieldNoise::default()
            });
            let field = CoherenceField::generate(resolution, extent, noise)?;

            println!("Coherence field {resolution}x{resolution} over [-{extent}, {extent}]");
            println!("  mean gradient magnitude  {:.6}", field.mean_gradient_magnitude());
            println!("Structure size at z = {HER_CRB_REDSHIFT} (Her-CrB Great Wall)");
            println!(
                "  LCDM      {:.4}",
                structure::lcdm_structure_size(HER_CRB_REDSHIFT)
            );
            println!(
                "  coherent  {:.4}",
                structure::coherent_structure_size(HER_CRB_REDSHIFT)
            );

            if let Some(path) = chart_path {
                let growth = structure::growth_curves(15.0, 100);
                let series = [
                    chart::Series::new("LCDM", growth.iter().map(|g| (g.z, g.lcdm)).collect()),
                    chart::Series::new(
                        "Coherent",
                        growth.iter().map(|g| (g.z, g.coherent)).collect(),
                    ),
                ];
                let markers = [chart::Marker::new(
                    format!("Her-CrB (z = {HER_CRB_REDSHIFT})"),
                    HER_CRB_REDSHIFT,
                )];
                chart::line_chart_with_markers_svg(
                    &series,
                    &markers,
                    &path,
                    "Structure growth",
                    "redshift z",
                    "relative size",
                )?;
                info!("Chart written to {}", path.display());
            }

            if let Some(path) = field_chart {
                chart::field_heatmap_svg(&field, &path, "Coherence basin")?;
                info!("Field chart written to {}", path.display());
            }
        }
    }

    Ok(())
}
