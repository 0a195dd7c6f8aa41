use anyhow::bail;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::nav::DockState;
use crate::route_config::PageHeader;
use crate::runtime_config::RuntimeConfig;
use crate::site::{
    builtin_site, has_errors, lint_site, load_site, print_lint_issues, read_site, SiteConfig,
};

/// Command-line interface for sitenav
#[derive(Parser)]
#[command(name = "sitenav")]
#[command(about = "Navigation matching and page metadata for the portfolio site", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show which dock item is active for a path
    Active {
        /// Current navigation path, already normalized (e.g. /work/my-project)
        path: String,

        /// Site definition file (YAML, JSON or TOML); defaults to the built-in site
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON object instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve the page title and tabs for a path
    Resolve {
        /// Current navigation path, already normalized
        path: String,

        /// Site definition file (YAML, JSON or TOML); defaults to the built-in site
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Title used when no route entry matches
        #[arg(long)]
        fallback: Option<String>,

        /// Print a JSON object instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List dock items and route patterns
    Routes {
        /// Site definition file (YAML, JSON or TOML); defaults to the built-in site
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Lint a site definition
    ///
    /// Reports structural errors (bad paths, bad patterns, duplicates) and
    /// warnings such as dock items shadowed by an earlier prefix item.
    Check {
        /// Site definition file (YAML, JSON or TOML); defaults to the built-in site
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exit with an error if any error-level issue is found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,
    },
}

/// Entry point used by the binary: runs `cli` against stdout with env defaults
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let runtime = RuntimeConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &runtime, &mut out)
}

/// Run a parsed command, writing its output to `out`
pub fn execute(cli: Cli, runtime: &RuntimeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match cli.command {
        Commands::Active { path, config, json } => {
            let site = select_site(config.as_deref(), runtime)?;
            let state = DockState::for_path(&path, &site.nav);
            let index = state.active_index().map_or(-1, |i| i as i64);
            let label = state.active_label(&site.nav);

            if json {
                let body = json!({
                    "path": path,
                    "active_index": index,
                    "label": label,
                });
                writeln!(out, "{body}")?;
            } else {
                match label {
                    Some(label) => writeln!(out, "{index} {label}")?,
                    None => writeln!(out, "{index}")?,
                }
            }
        }
        Commands::Resolve {
            path,
            config,
            fallback,
            json,
        } => {
            let site = select_site(config.as_deref(), runtime)?;
            let fallback = fallback.as_deref().unwrap_or(&runtime.fallback_title);
            let header = PageHeader::for_path(&path, &site.routes, fallback);

            if json {
                let body = json!({
                    "path": path,
                    "resolved": header.resolved,
                    "title": header.title,
                    "tabs": header.tabs,
                });
                writeln!(out, "{body}")?;
            } else {
                writeln!(out, "{}", header.title)?;
                for tab in header.tabs.into_iter().flatten() {
                    writeln!(out, "  {}\t{}\t{}", tab.id, tab.label, tab.href)?;
                }
            }
        }
        Commands::Routes { config } => {
            let site = select_site(config.as_deref(), runtime)?;
            dump_site(out, &site)?;
        }
        Commands::Check {
            config,
            fail_on_error,
        } => {
            // Lint must see definitions that `load_site` would reject
            let site = match config.as_deref().or(runtime.site_path.as_deref()) {
                Some(path) => Cow::Owned(read_site(path)?),
                None => Cow::Borrowed(builtin_site()),
            };
            let issues = lint_site(&site);
            print_lint_issues(out, &issues)?;
            if fail_on_error && has_errors(&issues) {
                bail!("site definition has error-level lint issues");
            }
        }
    }

    Ok(())
}

/// `--config` first, then `SITENAV_CONFIG`, then the built-in site
fn select_site(
    config: Option<&Path>,
    runtime: &RuntimeConfig,
) -> anyhow::Result<Cow<'static, SiteConfig>> {
    match config.or(runtime.site_path.as_deref()) {
        Some(path) => Ok(Cow::Owned(load_site(path)?)),
        None => Ok(Cow::Borrowed(builtin_site())),
    }
}

fn dump_site(out: &mut dyn Write, site: &SiteConfig) -> io::Result<()> {
    writeln!(out, "[nav] count={}", site.nav.len())?;
    for (index, item) in site.nav.iter().enumerate() {
        writeln!(out, "[nav] {index} {} {} -> {}", item.match_type, item.path, item.label)?;
    }
    writeln!(out, "[routes] count={}", site.routes.len())?;
    for (pattern, config) in site.routes.iter() {
        match &config.tabs {
            Some(tabs) => writeln!(out, "[route] {pattern} -> {} (tabs={})", config.title, tabs.len())?,
            None => writeln!(out, "[route] {pattern} -> {}", config.title)?,
        }
    }
    Ok(())
}
