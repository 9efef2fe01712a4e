use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use claim_core::Catalog;
use claim_core::calculations::audit_ordering;
use serde::Serialize;
use tracing::{debug, info, warn};

use claim_ui::currency::format_range;
use claim_ui::{CalculatorView, SiteConfig, app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal-injury compensation estimates from the command line.
///
/// Answers are given as `key=value` pairs using the question ids shown by
/// `render`.
#[derive(Debug, Parser)]
#[command(name = "claim-estimator", version)]
struct Cli {
    /// Site configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,claim::analytics=off`.
    /// Overrides the config file; `RUST_LOG` overrides both.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available calculators.
    List,

    /// Compute an estimate from a complete set of answers.
    Estimate {
        /// Calculator slug or route.
        #[arg(long, short)]
        calculator: String,

        /// An answer as `question=value`. Repeatable.
        #[arg(long = "answer", short = 'a')]
        answers: Vec<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Hand the result to the configured lead backend.
        #[arg(long)]
        submit: bool,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Render one step of a calculator form, or its results, as HTML.
    Render {
        /// Calculator slug or route.
        #[arg(long, short)]
        calculator: String,

        /// 1-based step to render. Omit to render results.
        #[arg(long)]
        step: Option<usize>,

        /// An answer as `question=value`. Repeatable.
        #[arg(long = "answer", short = 'a')]
        answers: Vec<String>,
    },

    /// Answer a calculator's questions at the terminal.
    Interactive {
        /// Calculator slug or route.
        #[arg(long, short)]
        calculator: String,
    },

    /// Check that low never exceeds high for every answer combination.
    Audit {
        /// Audit one calculator instead of all of them.
        #[arg(long, short)]
        calculator: Option<String>,
    },
}

/// How the firm can reach the claimant. Sent with `--submit`.
#[derive(Debug, Args)]
struct ContactArgs {
    /// Claimant's name.
    #[arg(long, requires = "submit")]
    name: Option<String>,

    /// Claimant's phone number.
    #[arg(long, requires = "submit")]
    phone: Option<String>,

    /// Claimant's email address.
    #[arg(long, requires = "submit")]
    email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

#[derive(Debug, Serialize)]
struct EstimateJson<'a> {
    calculator: &'a str,
    #[serde(flatten)]
    range: &'a claim_core::EstimateRange,
    midpoint: rust_decimal::Decimal,
    formatted: String,
    disclaimer: &'a str,
    evaluation_route: &'a str,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn list(catalog: &Catalog) {
    for definition in catalog.iter() {
        println!(
            "{:<22} {:<46} {} steps  {}",
            definition.slug,
            definition.route,
            definition.step_count(),
            definition.title
        );
    }
}

async fn estimate(
    catalog: &Catalog,
    site: &SiteConfig,
    calculator: &str,
    answers: &[String],
    format: Format,
    submit: bool,
    contact: &ContactArgs,
) -> Result<()> {
    let definition = app::find_calculator(catalog, calculator)?;
    let answers = app::parse_answers(answers)?;
    let session = app::advance_session(definition, &answers, None)?;
    let range = session
        .result()
        .context("form finished without an estimate")?;
    let definition = session.definition();
    let view = CalculatorView::new(site);

    match format {
        Format::Text => print!("{}", view.render_text(definition, range)),
        Format::Html => print!("{}", view.render_results(definition, range)?),
        Format::Json => {
            let json = EstimateJson {
                calculator: &definition.slug,
                range,
                midpoint: range.midpoint(),
                formatted: format_range(range),
                disclaimer: &definition.disclaimer,
                evaluation_route: &definition.evaluation_route,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    if submit {
        let port = app::build_lead_registry()
            .create(&site.leads)
            .await
            .context("cannot create lead port")?;
        let contact = app::contact_details(
            contact.name.as_deref(),
            contact.phone.as_deref(),
            contact.email.as_deref(),
        );
        session
            .submit_lead(port.as_ref(), contact)
            .await
            .context("lead submission failed")?;
        info!(backend = port.name(), "estimate submitted as a lead");
    }

    session.close();
    Ok(())
}

fn render(
    catalog: &Catalog,
    site: &SiteConfig,
    calculator: &str,
    step: Option<usize>,
    answers: &[String],
) -> Result<()> {
    let definition = app::find_calculator(catalog, calculator)?;
    let answers = app::parse_answers(answers)?;
    let session = app::advance_session(definition, &answers, step)?;

    print!("{}", CalculatorView::new(site).render(session.form())?);
    session.close();
    Ok(())
}

async fn interactive(
    catalog: &Catalog,
    site: &SiteConfig,
    calculator: &str,
) -> Result<()> {
    let definition = app::find_calculator(catalog, calculator)?;
    let port = match app::build_lead_registry().create(&site.leads).await {
        Ok(port) => Some(port),
        Err(error) => {
            warn!(%error, "lead submission disabled");
            None
        }
    };

    let session = app::run_interactive(
        definition,
        site,
        port.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .await?;
    session.close();
    Ok(())
}

/// Returns `false` when any calculator has an ordering violation.
fn audit(
    catalog: &Catalog,
    calculator: Option<&str>,
) -> Result<bool> {
    let definitions = match calculator {
        Some(name) => vec![app::find_calculator(catalog, name)?],
        None => catalog.iter().cloned().collect(),
    };

    let mut clean = true;
    for definition in definitions {
        debug!(calculator = %definition.slug, "auditing");
        let report = audit_ordering(&definition);
        println!("{report}");
        clean &= report.is_clean();
    }
    Ok(clean)
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let site = SiteConfig::load_or_default(cli.config.as_deref()).context("cannot load config")?;
    let level = cli.log_level.as_deref().unwrap_or(&site.log_level);
    logging::init_logging(level, cli.log_file.as_deref())?;
    if let Some(path) = &cli.config {
        debug!(path = %path.display(), backend = %site.leads.backend, "loaded site config");
    }

    let catalog = Catalog::builtin().context("built-in calculator catalog is invalid")?;

    match cli.command {
        Command::List => list(&catalog),
        Command::Estimate {
            calculator,
            answers,
            format,
            submit,
            contact,
        } => estimate(&catalog, &site, &calculator, &answers, format, submit, &contact).await?,
        Command::Render {
            calculator,
            step,
            answers,
        } => render(&catalog, &site, &calculator, step, &answers)?,
        Command::Interactive { calculator } => interactive(&catalog, &site, &calculator).await?,
        Command::Audit { calculator } => {
            if !audit(&catalog, calculator.as_deref())? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
