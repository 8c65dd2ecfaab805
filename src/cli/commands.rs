use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::builder::TreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::model::StateSnapshot;
use crate::node::iter_preorder;
use crate::subtitle::Translations;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { state, locale }) => _tree(state, locale.as_deref(), settings),
        Some(Commands::Leaves { state }) => _leaves(state),
        Some(Commands::Orphans { state }) => _orphans(state),
        Some(Commands::Counts { state, all }) => _counts(state, *all, settings),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn load_translations(locale: Option<&Path>, settings: &Settings) -> CliResult<Translations> {
    match locale.or(settings.locale_file.as_deref()) {
        Some(path) => Ok(Translations::load(path)?),
        None => Ok(Translations::default()),
    }
}

#[instrument(skip(settings))]
fn _tree(state_path: &Path, locale: Option<&Path>, settings: &Settings) -> CliResult<()> {
    debug!("state_path: {:?}", state_path);
    let snapshot = StateSnapshot::load(state_path)?;
    let translations = load_translations(locale, settings)?;

    let mut builder = TreeBuilder::new();
    let roots = builder.build(&translations, &snapshot.categories, &snapshot.mods)?;

    for root in &roots {
        output::info(&root.to_tree_string());
    }
    if !builder.orphans().is_empty() {
        output::warning(&format!(
            "{} categories dropped (missing parent), see `modcat orphans`",
            builder.orphans().len()
        ));
    }
    Ok(())
}

#[instrument]
fn _leaves(state_path: &Path) -> CliResult<()> {
    debug!("state_path: {:?}", state_path);
    let snapshot = StateSnapshot::load(state_path)?;

    let mut builder = TreeBuilder::new();
    let roots = builder.build(&Translations::default(), &snapshot.categories, &snapshot.mods)?;

    for root in &roots {
        for leaf in root.leaf_ids() {
            output::info(&leaf);
        }
    }
    Ok(())
}

#[instrument]
fn _orphans(state_path: &Path) -> CliResult<()> {
    debug!("state_path: {:?}", state_path);
    let snapshot = StateSnapshot::load(state_path)?;

    let mut builder = TreeBuilder::new();
    builder.build(&Translations::default(), &snapshot.categories, &snapshot.mods)?;

    if builder.orphans().is_empty() {
        output::success("no orphaned categories");
        return Ok(());
    }

    output::header(&format!("{} orphaned categories:", builder.orphans().len()));
    for orphan in builder.orphans() {
        let parent = snapshot.categories[orphan]
            .parent_category
            .as_deref()
            .unwrap_or("?");
        output::detail(&format!("{} (missing parent: {})", orphan, parent));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _counts(state_path: &Path, all: bool, settings: &Settings) -> CliResult<()> {
    debug!("state_path: {:?}", state_path);
    let snapshot = StateSnapshot::load(state_path)?;

    let mut builder = TreeBuilder::new();
    let roots = builder.build(&Translations::default(), &snapshot.categories, &snapshot.mods)?;

    let show_empty = all || settings.show_empty;
    for node in iter_preorder(&roots) {
        if node.mod_count == 0 && !show_empty {
            continue;
        }
        output::info(&format!("{:>5}  {}", node.mod_count, node.category_id));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings)
                .unwrap_or_else(|_| String::from("<unrenderable settings>"));
            output::info(&rendered);
        }
        ConfigCommands::Init => {
            let Some(path) = Settings::global_config_path() else {
                output::warning("cannot resolve a config directory on this system");
                return Ok(());
            };
            if path.exists() {
                output::warning(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, Settings::template())?;
            output::success(&format!("created {}", path.display()));
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => {
                let marker = if path.exists() { "(exists)" } else { "(not created)" };
                output::info(&format!("{} {}", path.display(), marker));
            }
            None => output::warning("cannot resolve a config directory on this system"),
        },
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
