//! filestager-conf CLI - FileStager configuration schema inspector

use anyhow::Context;
use clap::Parser;
use filestager_conf::catalog;
use filestager_conf::component::Configurable;
use filestager_conf::config::{CliArgs, Commands, JobOptions, OutputFormat};
use filestager_conf::registry;
use filestager_conf::schema;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    match &args.command {
        Commands::List => cmd_list(args.format),
        Commands::Show { name } => cmd_show(name, args.format),
        Commands::Registry => cmd_registry(args.format),
        Commands::Schema => cmd_schema(args.format),
        Commands::Check { options, changed_only } => cmd_check(options, *changed_only, args.format),
    }
}

fn cmd_list(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let names: Vec<String> = catalog::all().iter().map(|d| d.configurable_name()).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Text => {
            for descriptor in catalog::all() {
                println!(
                    "{:<28} {:<20} {} properties",
                    descriptor.configurable_name(),
                    descriptor.kind.base_name(),
                    descriptor.properties.len()
                );
            }
        }
    }
    Ok(())
}

fn cmd_show(name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let descriptor = catalog::get(name)?;
    match format {
        OutputFormat::Json => {
            let component = schema::ComponentSchema::from(descriptor);
            println!("{}", serde_json::to_string_pretty(&component)?);
        }
        OutputFormat::Text => print!("{}", schema::render_component(descriptor)),
    }
    Ok(())
}

fn cmd_registry(format: OutputFormat) -> anyhow::Result<()> {
    let db = registry::global();
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = db.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => print!("{}", schema::render_registry(db)),
    }
    Ok(())
}

fn cmd_schema(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", schema::render_json(catalog::all(), registry::global())?),
        OutputFormat::Text => print!("{}", schema::render_text(catalog::all(), registry::global())),
    }
    Ok(())
}

fn cmd_check(path: &Path, changed_only: bool, format: OutputFormat) -> anyhow::Result<()> {
    let options = JobOptions::load(path)?;
    let configured = options
        .configure_all()
        .with_context(|| format!("applying job options from {}", path.display()))?;

    log_output_levels(&configured);

    match format {
        OutputFormat::Json => {
            let effective: serde_json::Map<String, serde_json::Value> = configured
                .iter()
                .map(|conf| {
                    let values = if changed_only { conf.overridden() } else { conf.values() };
                    let props = values
                        .into_iter()
                        .map(|(name, value)| Ok((name.to_string(), serde_json::to_value(value)?)))
                        .collect::<serde_json::Result<serde_json::Map<_, _>>>()?;
                    Ok((conf.name().to_string(), serde_json::Value::Object(props)))
                })
                .collect::<serde_json::Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&effective)?);
        }
        OutputFormat::Text => {
            for conf in &configured {
                print!("{}", schema::render_configurable(conf, changed_only));
            }
        }
    }
    Ok(())
}

/// Report each instance's verbosity; an out-of-range level is only a warning
fn log_output_levels(configured: &[Configurable<'_>]) {
    for conf in configured {
        match conf.output_level() {
            Ok(Some(level)) => tracing::debug!(
                "{} OutputLevel {} (filter {})",
                conf.full_name(),
                level.name(),
                level.level_filter()
            ),
            Ok(None) => {}
            Err(e) => tracing::warn!("{}: {}", conf.full_name(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn options_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_check_accepts_out_of_range_output_level() {
        let file = options_file(r#"{"FileStagerSvc": {"OutputLevel": 9}}"#);
        assert!(cmd_check(file.path(), true, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_check_rejects_bad_override() {
        let file = options_file(r#"{"FileStagerSvc": {"OutputLevel": "DEBUG"}}"#);
        assert!(cmd_check(file.path(), true, OutputFormat::Text).is_err());
    }
}
