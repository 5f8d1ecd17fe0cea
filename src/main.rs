use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use balsamic::{Module, PklModule, PklRenderer, Project};

/// On-disk description of a project: its name and every module tree.
#[derive(Debug, Deserialize)]
struct ProjectFile {
    name: String,
    #[serde(default)]
    modules: Vec<PklModule>,
}

fn cli() -> Command {
    Command::new("balsamic")
        .about("Render Pkl source code from JSON syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a single module tree to stdout")
                .arg(
                    Arg::new("input")
                        .help("JSON file holding a module tree")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("project")
                .about("Render a project and write its files to a directory")
                .arg(
                    Arg::new("input")
                        .help("JSON file holding the project name and modules")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Directory the rendered files are written to")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path))
}

fn run_render(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("missing input file")?;

    let module: Module = read_json(input)?;
    let output = PklRenderer.render(&module)?;

    print!("{}", output);
    Ok(())
}

fn run_project(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("missing input file")?;
    let out_dir = matches
        .get_one::<PathBuf>("out")
        .context("missing output directory")?;

    let project_file: ProjectFile = read_json(input)?;
    let mut project = Project::new(project_file.name);
    for module in project_file.modules {
        project.add_module(module);
    }

    let rendered = project.render()?;
    for path in rendered.files() {
        let data = rendered.read_file(&path)?;
        write_output(out_dir, &path, &data)?;
    }

    info!(out = %out_dir.display(), "wrote project");
    Ok(())
}

fn write_output(out_dir: &Path, relative: &str, data: &[u8]) -> Result<()> {
    let target = out_dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&target, data).with_context(|| format!("write {}", target.display()))?;
    debug!(path = %target.display(), bytes = data.len(), "wrote file");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("render", sub)) => run_render(sub),
        Some(("project", sub)) => run_project(sub),
        _ => unreachable!("subcommand_required is set"),
    }
}
