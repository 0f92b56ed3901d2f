use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tax_core::{ComprehensiveSummary, compose_summary, validate_ya2025};
use tracing::{debug, warn};

use crate::config::{Preferences, Theme};
use crate::i18n::{Key, Language, label};
use crate::render::{RenderContext, render_summary};
use crate::share::{income_from_query, share_url};
use crate::utils::parse_income;

/// Singapore income tax, CPF and take-home pay estimator (YA 2025).
///
/// Prints the tax, CPF contributions and take-home pay for an annual
/// employment income.
#[derive(Debug, Parser)]
#[command(name = "sgtax", version)]
pub struct Cli {
    /// Annual income, e.g. `80000` or `S$80,000`.
    #[arg(allow_negative_numbers = true)]
    pub income: Option<String>,

    /// Read the income from a shared link instead.
    #[arg(long, conflicts_with = "income")]
    pub url: Option<String>,

    /// Treat the person as not eligible for CPF.
    #[arg(long)]
    pub non_resident: bool,

    /// Display language: en, zh-CN, ms or ta.
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Colour theme for this run.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Save the language and theme as the new defaults.
    #[arg(long)]
    pub save: bool,

    /// Switch to the next theme and save it.
    #[arg(long)]
    pub toggle_theme: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also print a shareable link built on this base URL.
    #[arg(long, value_name = "BASE_URL")]
    pub share: Option<String>,

    /// Preferences file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Also append log records to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Income from `--url` or the positional argument, or `None` when neither is given.
    pub fn income(&self) -> Option<Decimal> {
        if let Some(url) = &self.url {
            let income = income_from_query(url);
            if income.is_none() {
                warn!(url = %url, "link has no positive income; using 0");
            }
            return Some(income.unwrap_or(Decimal::ZERO));
        }
        self.income.as_deref().map(parse_income)
    }

    /// Stored preferences with this run's overrides applied.
    pub fn apply_overrides(
        &self,
        mut prefs: Preferences,
    ) -> Preferences {
        if let Some(theme) = self.theme {
            prefs.theme = theme;
        }
        if let Some(language) = self.language {
            prefs.language = language;
        }
        if self.toggle_theme {
            prefs.theme = prefs.theme.toggle();
        }
        prefs
    }
}

/// Text printed for one summary: JSON or the themed report.
pub fn report(
    cli: &Cli,
    ctx: &RenderContext,
    summary: &ComprehensiveSummary,
) -> Result<String> {
    let mut out = if cli.json {
        serde_json::to_string_pretty(summary).context("cannot serialize summary")?
    } else {
        render_summary(ctx, summary)
    };

    if let Some(base) = &cli.share {
        let link = share_url(base, summary.annual_income);
        if cli.json {
            out = format!("{out}\n{link}");
        } else {
            out = format!("{out}\n{}: {link}", label(ctx.language, Key::ShareLink));
        }
    }
    Ok(out)
}

/// Runs one invocation and returns the text to print.
///
/// Saves preferences first when `--save` or `--toggle-theme` is given.
pub fn execute(cli: &Cli) -> Result<String> {
    validate_ya2025().context("built-in tax tables are inconsistent")?;

    let prefs_path = cli.config.clone().or_else(Preferences::default_path);
    let stored = match &prefs_path {
        Some(path) => Preferences::load(path)?,
        None => Preferences::default(),
    };
    let prefs = cli.apply_overrides(stored);
    let saving = cli.save || cli.toggle_theme;

    if saving {
        let path = prefs_path
            .as_deref()
            .context("no config directory found; pass --config <PATH>")?;
        prefs.save(path)?;
    }

    let income = match cli.income() {
        Some(income) => income,
        None if saving => {
            return Ok(format!(
                "theme: {}, language: {}",
                prefs.theme.name(),
                prefs.language.code()
            ));
        }
        None => {
            debug!("no income given; showing the zero summary");
            Decimal::ZERO
        }
    };

    let colorfgbg = std::env::var("COLORFGBG").ok();
    let ctx = RenderContext {
        language: prefs.language,
        theme: prefs.theme.resolve(colorfgbg.as_deref()),
        color: !cli.no_color && !cli.json && io::stdout().is_terminal(),
    };
    let summary = compose_summary(income, !cli.non_resident);
    report(cli, &ctx, &summary)
}

pub fn run(cli: Cli) -> Result<()> {
    println!("{}", execute(&cli)?);
    Ok(())
}
