use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use slogen_core::{
    RuleDocument, SloConfig, assemble_document, check_document, load_config,
    render_document, resolve_config_path, resolve_destination, validate_config, write_document,
};

use crate::cli::{Cli, Commands, RenderArgs};

mod report;
mod support;

#[cfg(test)]
mod tests;

use self::report::{DestinationReport, RunReport};
use self::support::print_json;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    tracing::debug!(path = %config_path.display(), "resolved config path");

    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    validate_config(&config)
        .with_context(|| format!("invalid config {}", config_path.display()))?;

    let command = cli.command.unwrap_or(Commands::Generate);
    let output_dir = cli.output_dir.as_deref();
    match command {
        Commands::Generate => {
            let report = generate_all(&config, &config_path, output_dir)?;
            print_json(&report)?;
        }
        Commands::Check => {
            let report = check_all(&config, &config_path, output_dir)?;
            print_json(&report)?;
            let outdated = report.outdated_count();
            if outdated > 0 {
                anyhow::bail!("{outdated} rule file(s) are missing or out of date");
            }
        }
        Commands::Render(args) => {
            let mut stdout = io::stdout().lock();
            render_all(&config, &args, &mut stdout)?;
        }
    }
    Ok(())
}

fn generate_all(
    config: &SloConfig,
    config_path: &Path,
    output_dir: Option<&Path>,
) -> Result<RunReport> {
    let mut report = RunReport::new(config_path);
    for (destination, inputs) in &config.slo_files {
        tracing::info!(destination = %destination, slos = inputs.len(), "generating rules");
        let document = assemble_document(inputs);
        let path = resolve_destination(output_dir, destination);
        let status = write_document(&path, &document)
            .with_context(|| format!("failed to write rule file for {destination}"))?;
        report.push(DestinationReport::new(destination, &path, &document, status));
    }
    Ok(report)
}

fn check_all(
    config: &SloConfig,
    config_path: &Path,
    output_dir: Option<&Path>,
) -> Result<RunReport> {
    let mut report = RunReport::new(config_path);
    for (destination, inputs) in &config.slo_files {
        let document = assemble_document(inputs);
        let path = resolve_destination(output_dir, destination);
        let status = check_document(&path, &document)
            .with_context(|| format!("failed to check rule file for {destination}"))?;
        report.push(DestinationReport::new(destination, &path, &document, status));
    }
    Ok(report)
}

fn render_all(config: &SloConfig, args: &RenderArgs, out: &mut impl Write) -> Result<()> {
    let selected = select_documents(config, args.destination.as_deref())?;
    for (index, (destination, document)) in selected.iter().enumerate() {
        if index > 0 {
            writeln!(out, "---")?;
        }
        writeln!(out, "# {destination}")?;
        out.write_all(render_document(document)?.as_bytes())?;
    }
    Ok(())
}

fn select_documents<'a>(
    config: &'a SloConfig,
    only: Option<&str>,
) -> Result<Vec<(&'a str, RuleDocument)>> {
    if let Some(destination) = only {
        let (key, inputs) = config
            .slo_files
            .get_key_value(destination)
            .with_context(|| format!("destination '{destination}' is not in slo_files"))?;
        return Ok(vec![(key.as_str(), assemble_document(inputs))]);
    }

    Ok(config
        .slo_files
        .iter()
        .map(|(destination, inputs)| (destination.as_str(), assemble_document(inputs)))
        .collect())
}
