use tracing::{debug, info, instrument};

use crate::application::{train_and_evaluate, Evaluation};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::TreeBuilder;
use crate::infrastructure::load_dataset;

/// Run the command and print the number of correct predictions to stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let evaluation = run(cli)?;
    output::result(&evaluation.correct);
    Ok(())
}

/// Load both datasets, train on the first, evaluate on the second.
///
/// Diagnostics requested by flags go to stderr; nothing is written to stdout.
#[instrument(level = "debug", skip_all)]
pub fn run(cli: &Cli) -> CliResult<Evaluation> {
    let settings = resolve_settings(cli)?;
    if cli.show_config {
        output::header("Effective configuration");
        output::detail(&settings.to_toml()?);
    }

    let training = load_dataset(&cli.training_data)?;
    let testing = load_dataset(&cli.testing_data)?;
    info!(
        training = training.len(),
        testing = testing.len(),
        "Datasets loaded"
    );

    let builder = TreeBuilder::with_termination_ratio(settings.termination_ratio);
    let (tree, evaluation) = train_and_evaluate(&builder, &training, &testing)?;

    if cli.print_tree {
        match &tree {
            Some(tree) => {
                output::header(&format!(
                    "Decision tree: {} nodes, {} leaves, depth {}",
                    tree.node_count(),
                    tree.leaf_count(),
                    tree.depth()
                ));
                output::detail(tree);
            }
            None => output::header("Decision tree: empty"),
        }
    }

    Ok(evaluation)
}

/// Layered settings with the command-line override applied last, validated
/// once every layer is in.
fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load_layers(cli.config.as_deref())?;
    match cli.termination_ratio {
        Some(ratio) => {
            settings.termination_ratio = ratio;
            settings
                .validate()
                .map_err(|e| CliError::InvalidArgs(format!("--termination-ratio: {}", e)))?;
        }
        None => settings.validate()?,
    }
    debug!(?settings, "Settings resolved");
    Ok(settings)
}
