//! # CLI Layer
//!
//! One possible UI client for solidkit, not the application itself.
//!
//! This is the only place that touches stdout/stderr, reads the environment, and
//! decides which catalog to use. Everything else goes through `SolidApi` and
//! comes back as a `CmdResult` to print.
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves the config dir and catalog, builds the API
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::print::{print_config, print_messages, print_products, print_products_json};
use super::setup::{init_tracing, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use solidkit::api::{ChildArg, ConfigAction, Criteria, MatchMode, SolidApi, SolidPaths};
use solidkit::catalog::{Catalog, InMemoryCatalog, JsonCatalog};
use solidkit::config::SolidConfig;
use solidkit::error::{Result, SolidError};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_ENV: &str = "SOLIDKIT_CONFIG_DIR";

struct AppContext {
    api: SolidApi<Box<dyn Catalog>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    match cli.command {
        Commands::Filter {
            colors,
            sizes,
            name,
            any,
            not,
            catalog,
            json,
        } => {
            let ctx = init_context(&config_dir, catalog)?;
            let criteria = Criteria {
                colors,
                sizes,
                name,
                mode: if any { MatchMode::Any } else { MatchMode::All },
                negate: not,
            };
            handle_filter(&ctx, &criteria, json)
        }
        Commands::Products { catalog, json } => {
            let ctx = init_context(&config_dir, catalog)?;
            handle_products(&ctx, json)
        }
        Commands::Html {
            root,
            children,
            indent,
        } => {
            let ctx = init_context(&config_dir, None)?;
            handle_html(&ctx, &root, &children, indent)
        }
        Commands::Demo => {
            let ctx = init_context(&config_dir, None)?;
            handle_demo(&ctx)
        }
        Commands::Config { key, value } => {
            // Config never reads the catalog.
            let api = SolidApi::new(
                Box::new(InMemoryCatalog::default()) as Box<dyn Catalog>,
                SolidPaths::new(&config_dir),
            );
            handle_config(&AppContext { api }, key, value)
        }
    }
}

/// `--config-dir`, then `$SOLIDKIT_CONFIG_DIR`, then the platform config dir.
fn resolve_config_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "solidkit", "solidkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SolidError::Config("Could not determine config dir".into()))
}

fn init_context(config_dir: &Path, catalog_flag: Option<PathBuf>) -> Result<AppContext> {
    let config = SolidConfig::load(config_dir)?;

    let catalog: Box<dyn Catalog> = match catalog_flag.or(config.catalog) {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(InMemoryCatalog::demo()),
    };
    debug!(source = %catalog.source(), "using catalog");

    let api = SolidApi::new(catalog, SolidPaths::new(config_dir));
    Ok(AppContext { api })
}

fn handle_filter(ctx: &AppContext, criteria: &Criteria, json: bool) -> Result<()> {
    let result = ctx.api.filter_products(criteria)?;
    if json {
        return print_products_json(&result.listed_products);
    }
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_products(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.products()?;
    if json {
        return print_products_json(&result.listed_products);
    }
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_html(
    ctx: &AppContext,
    root: &str,
    children: &[ChildArg],
    indent: Option<usize>,
) -> Result<()> {
    let result = ctx.api.render_html(root, children, indent)?;
    if let Some(rendered) = &result.rendered {
        print!("{}", rendered);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_demo(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.demo()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidkit::model::{Color, Size};

    #[test]
    fn config_dir_flag_wins() {
        let dir = resolve_config_dir(Some(Path::new("/tmp/solidkit-flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/solidkit-flag"));
    }

    #[test]
    fn catalog_flag_beats_configured_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SolidConfig::default();
        config.catalog = Some(dir.path().join("configured.json"));
        config.save(dir.path()).unwrap();

        let flagged = dir.path().join("flag.json");
        std::fs::write(
            &flagged,
            r#"[{"name":"Plum","color":"blue","size":"small"}]"#,
        )
        .unwrap();

        let ctx = init_context(dir.path(), Some(flagged)).unwrap();
        let result = ctx.api.products().unwrap();
        assert_eq!(result.listed_products[0].name(), "Plum");
    }

    #[test]
    fn no_catalog_falls_back_to_demo() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = init_context(dir.path(), None).unwrap();
        let result = ctx
            .api
            .filter_products(&Criteria {
                colors: vec![Color::Green],
                sizes: vec![Size::Large],
                ..Default::default()
            })
            .unwrap();
        assert_eq!(result.listed_products[0].name(), "Tree");
    }
}
