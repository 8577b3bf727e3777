//! docdeck CLI: catalog checks and headless rendering.
//!
//! Commands:
//! - `check`: run the integrity check, non-zero exit on errors
//! - `tree`: print the view / tab / section hierarchy
//! - `render`: render one (view, tab, expanded sections) state as text or JSON

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use docdeck_core::{
    builtin, integrity, Catalog, CatalogError, ContentNode, ContentPayload, ContentTree,
    IntegrityReport, Navigator, Severity,
};

#[derive(Parser)]
#[command(name = "docdeck-cli", about = "Check and render docdeck documentation catalogs")]
struct Cli {
    /// TOML catalog to use instead of the built-in documentation.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the catalog for broken references and duplicate ids.
    Check,
    /// Print views, tabs and sections. Defaults are marked with '*'.
    Tree,
    /// Render one panel without a terminal UI.
    Render {
        /// View to show. Defaults to the catalog's default view.
        #[arg(long)]
        view: Option<String>,

        /// Tab to show. Defaults to the view's default tab.
        #[arg(long)]
        tab: Option<String>,

        /// Sections to expand (repeatable).
        #[arg(long = "expand", value_name = "SECTION")]
        expand: Vec<String>,

        /// Emit the content tree as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let catalog = cli.catalog.as_deref();
    match cli.command {
        Commands::Check => run_check(catalog, &mut out),
        Commands::Tree => run_tree(&load(catalog)?, &mut out),
        Commands::Render {
            view,
            tab,
            expand,
            json,
        } => run_render(
            load(catalog)?,
            view.as_deref(),
            tab.as_deref(),
            &expand,
            json,
            &mut out,
        ),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::from_file(path),
        None => builtin::autoapply(),
    }
}

fn load(path: Option<&Path>) -> Result<Catalog> {
    let catalog = load_catalog(path).with_context(|| match path {
        Some(p) => format!("loading catalog {}", p.display()),
        None => "loading built-in catalog".to_string(),
    })?;
    debug!(title = catalog.title(), "catalog loaded");
    Ok(catalog)
}

fn run_check(path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let catalog = match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(CatalogError::Integrity(report)) => {
            print_report(&report, out)?;
            bail!("catalog has {} error(s)", report.errors().count());
        }
        Err(other) => return Err(other).context("loading catalog"),
    };

    let report = integrity::check(&catalog);
    print_report(&report, out)?;

    let tabs: usize = catalog.views().iter().map(|v| v.tabs.len()).sum();
    let sections: usize = catalog
        .views()
        .iter()
        .flat_map(|v| &v.tabs)
        .map(|t| t.sections().count())
        .sum();
    writeln!(
        out,
        "ok: {} views, {tabs} tabs, {sections} sections, {} content entries",
        catalog.views().len(),
        catalog.registry().len(),
    )?;
    Ok(())
}

fn print_report(report: &IntegrityReport, out: &mut impl Write) -> Result<()> {
    for issue in report.issues() {
        let level = match issue.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(out, "{level}: {issue}")?;
    }
    Ok(())
}

fn run_tree(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", catalog.title())?;
    let default_view = catalog
        .default_view()
        .or_else(|| catalog.views().first().map(|v| &v.id));
    for view in catalog.views() {
        let mark = if Some(&view.id) == default_view { "*" } else { " " };
        writeln!(out, "{mark} {} — {}", view.id, view.label)?;

        let default_tab = view.default_tab.as_ref().or_else(|| view.tabs.first().map(|t| &t.id));
        for tab in &view.tabs {
            let mark = if Some(&tab.id) == default_tab { "*" } else { " " };
            writeln!(out, "    {mark} {} — {}", tab.id, tab.label)?;
            for section in tab.sections() {
                writeln!(out, "          {} — {}", section.id, section.summary)?;
            }
        }
    }
    Ok(())
}

fn run_render(
    catalog: Catalog,
    view: Option<&str>,
    tab: Option<&str>,
    expand: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut nav = Navigator::new(catalog)?;
    if let Some(view) = view {
        nav.choose_view(view)?;
    }
    if let Some(tab) = tab {
        nav.choose_tab(tab)?;
    }

    // Repeating a section still means "expanded", not a second toggle.
    let wanted: BTreeSet<&str> = expand.iter().map(String::as_str).collect();
    for section in wanted {
        let declared = nav
            .current_tab_spec()
            .is_some_and(|t| t.has_section(section));
        if !declared {
            bail!(
                "tab '{}/{}' has no section '{section}'",
                nav.current_view(),
                nav.current_tab().map(|t| t.as_str()).unwrap_or("?"),
            );
        }
        nav.toggle_section(section);
    }

    let tree = nav.render()?;
    if json {
        let doc = serde_json::json!({
            "fingerprint": tree.fingerprint(),
            "tree": &tree,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        write_tree(&tree, out)?;
    }
    Ok(())
}

fn write_tree(tree: &ContentTree<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} › {}", tree.view_label, tree.tab_label)?;
    for node in &tree.nodes {
        match node {
            ContentNode::Heading { text } => {
                writeln!(out)?;
                writeln!(out, "## {text}")?;
            }
            ContentNode::Block { payload, .. } => write_payload(payload, "", out)?,
            ContentNode::Section {
                summary,
                expanded,
                body,
                ..
            } => {
                let marker = if *expanded { "[-]" } else { "[+]" };
                writeln!(out, "{marker} {summary}")?;
                if let Some(payload) = body {
                    write_payload(payload, "    ", out)?;
                }
            }
        }
    }
    writeln!(out)?;
    writeln!(out, "fingerprint: {}", tree.fingerprint())?;
    Ok(())
}

fn write_payload(payload: &ContentPayload, pad: &str, out: &mut impl Write) -> Result<()> {
    if let Some(title) = payload.title() {
        writeln!(out, "{pad}{title}")?;
    }
    match payload {
        ContentPayload::Text { body, .. } => writeln!(out, "{pad}{body}")?,
        ContentPayload::List { items, .. } => {
            for item in items {
                writeln!(out, "{pad}- {item}")?;
            }
        }
        ContentPayload::Table { columns, rows, .. } => {
            writeln!(out, "{pad}| {} |", columns.join(" | "))?;
            for row in rows {
                writeln!(out, "{pad}| {} |", row.join(" | "))?;
            }
        }
        ContentPayload::Diagram { source, .. } => {
            for line in source.lines() {
                writeln!(out, "{pad}{line}")?;
            }
        }
        ContentPayload::Fields { fields, .. } => {
            for (name, value) in fields {
                writeln!(out, "{pad}{name}: {value}")?;
            }
        }
    }
    Ok(())
}
