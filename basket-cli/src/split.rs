//! Split command implementation for the basket splitter CLI.

use basket_core::{Basket, Configuration, Cover, CoverSolver, build_index};
use basket_fs::{create_utf8_file, open_utf8_file};
use basket_solver_greedy::{GreedyConfig, GreedySolver};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufReader, BufWriter, Write};

use crate::{
    ARG_BASKET, ARG_CONFIG, ARG_MAX_ROUNDS, ARG_OUTPUT, CliError, Console, DEFAULT_OUTPUT,
    ENV_BASKET, ENV_CONFIG,
};

const CONFIG_PROMPT: &str = "Enter config file path: ";
const BASKET_PROMPT: &str = "Enter basket file path: ";

/// CLI arguments for the `split` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Split a basket into delivery groups. The delivery \
                 configuration maps each product name to the delivery \
                 methods that can carry it; the basket is a JSON array of \
                 product names. The resulting groups are written as a JSON \
                 object keyed by delivery method.",
    about = "Split a basket into delivery groups"
)]
#[ortho_config(prefix = "BASKET")]
pub(crate) struct SplitArgs {
    /// Path to a JSON array of basket items.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) basket_path: Option<Utf8PathBuf>,
    /// Path to the JSON delivery configuration.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config_path: Option<Utf8PathBuf>,
    /// Where to write the delivery groups (defaults to `output.json`).
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Print the delivery groups to standard output instead of a file.
    #[arg(long, conflicts_with = "output")]
    #[serde(default)]
    pub(crate) stdout: bool,
    /// Prompt on the console for input paths that were not supplied.
    #[arg(long)]
    #[serde(default)]
    pub(crate) interactive: bool,
    /// Fail once this many delivery groups have been formed.
    #[arg(long = ARG_MAX_ROUNDS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_rounds: Option<usize>,
}

impl SplitArgs {
    pub(crate) fn into_config(self, console: &mut Console<'_>) -> Result<SplitConfig, CliError> {
        let mut merged = self.load_and_merge().map_err(CliError::Configuration)?;
        if merged.interactive {
            merged.prompt_for_missing(console)?;
        }
        SplitConfig::try_from(merged)
    }

    fn prompt_for_missing(&mut self, console: &mut Console<'_>) -> Result<(), CliError> {
        if self.config_path.is_none() {
            self.config_path = Some(console.ask_path(CONFIG_PROMPT, ARG_CONFIG)?);
        }
        if self.basket_path.is_none() {
            self.basket_path = Some(console.ask_path(BASKET_PROMPT, ARG_BASKET)?);
        }
        Ok(())
    }
}

/// Destination for the serialised cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputTarget {
    File(Utf8PathBuf),
    Stdout,
}

/// Resolved `split` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitConfig {
    /// Path to the delivery configuration.
    pub(crate) config_path: Utf8PathBuf,
    /// Path to the basket.
    pub(crate) basket_path: Utf8PathBuf,
    pub(crate) output: OutputTarget,
    /// Whether to print the closing confirmation line.
    pub(crate) interactive: bool,
    pub(crate) max_rounds: Option<usize>,
}

impl SplitConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.config_path, ARG_CONFIG)?;
        Self::require_existing(&self.basket_path, ARG_BASKET)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match basket_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    const fn solver_config(&self) -> GreedyConfig {
        GreedyConfig {
            max_rounds: self.max_rounds,
        }
    }
}

impl TryFrom<SplitArgs> for SplitConfig {
    type Error = CliError;

    fn try_from(args: SplitArgs) -> Result<Self, Self::Error> {
        let config_path = args.config_path.ok_or(CliError::MissingArgument {
            field: ARG_CONFIG,
            env: ENV_CONFIG,
        })?;
        let basket_path = args.basket_path.ok_or(CliError::MissingArgument {
            field: ARG_BASKET,
            env: ENV_BASKET,
        })?;
        let output = if args.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(
                args.output
                    .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT)),
            )
        };
        Ok(Self {
            config_path,
            basket_path,
            output,
            interactive: args.interactive,
            max_rounds: args.max_rounds,
        })
    }
}

pub(crate) fn run_split_with(args: SplitArgs, console: &mut Console<'_>) -> Result<(), CliError> {
    let config = resolve_split_config(args, console)?;
    let cover = execute_split(&config)?;
    match &config.output {
        OutputTarget::Stdout => write_cover(console.output(), &cover),
        OutputTarget::File(path) => {
            save_cover(path, &cover)?;
            log::info!(
                "wrote {} delivery groups ({} items) to {path}",
                cover.len(),
                cover.item_count()
            );
            if config.interactive {
                writeln!(
                    console.output(),
                    "Basket has been split and saved to {path}."
                )
                .map_err(CliError::WriteCover)?;
            }
            Ok(())
        }
    }
}

fn resolve_split_config(
    args: SplitArgs,
    console: &mut Console<'_>,
) -> Result<SplitConfig, CliError> {
    let config = args.into_config(console)?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_split(config: &SplitConfig) -> Result<Cover, CliError> {
    let configuration = load_configuration(&config.config_path)?;
    let basket = load_basket(&config.basket_path)?;
    let index =
        build_index(&configuration).map_err(|source| CliError::InvalidConfiguration {
            path: config.config_path.clone(),
            source,
        })?;
    let solver = GreedySolver::with_config(index, config.solver_config());
    solver
        .split(&basket)
        .map_err(|source| CliError::Split { source })
}

/// Loads a JSON delivery configuration from disk.
pub(crate) fn load_configuration(path: &Utf8Path) -> Result<Configuration, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenConfiguration {
        path: path.to_path_buf(),
        source,
    })?;
    let configuration: Configuration = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| CliError::ParseConfiguration {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded delivery configuration for {} items from {path}",
        configuration.len()
    );
    Ok(configuration)
}

/// Loads a JSON basket from disk and rejects blank item names.
pub(crate) fn load_basket(path: &Utf8Path) -> Result<Basket, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenBasket {
        path: path.to_path_buf(),
        source,
    })?;
    let basket: Basket =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseBasket {
            path: path.to_path_buf(),
            source,
        })?;
    basket
        .validate()
        .map_err(|source| CliError::InvalidBasket {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded basket of {} items from {path}", basket.len());
    Ok(basket)
}

fn save_cover(path: &Utf8Path, cover: &Cover) -> Result<(), CliError> {
    let file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_cover(&mut writer, cover)?;
    writer.flush().map_err(CliError::WriteCover)
}

/// Writes the cover as JSON indented by four spaces, followed by a newline.
pub(crate) fn write_cover(writer: &mut dyn Write, cover: &Cover) -> Result<(), CliError> {
    let mut payload = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut payload, PrettyFormatter::with_indent(b"    "));
    cover
        .serialize(&mut serializer)
        .map_err(CliError::SerialiseCover)?;
    payload.push(b'\n');
    writer.write_all(&payload).map_err(CliError::WriteCover)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SplitConfig, CliError> {
    let merged = SplitArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SplitConfig::try_from(merged)
}
