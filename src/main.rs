//! # fx-export
//!
//! Exports the 2DFX effect markers of a scene file.
//!
//! ```bash
//! fx-export                              # ./scene.data, summary only
//! fx-export level.data --output fx.data  # also write the entries
//! fx-export show fx.data                 # print a written entry list
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fx_export::{effects::Effect2dfx, export::EffectKind, scene::DEFAULT_SCENE_PATH, storage, Scene};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

#[derive(Debug, Parser)]
#[command(name = "fx-export")]
#[command(about = "Export scene effect markers as 2DFX entries")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scene file to export
    #[arg(default_value = DEFAULT_SCENE_PATH)]
    scene: PathBuf,

    /// Write the exported entries to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every entry
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the entries of a file written with --output
    Show {
        effects_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => export_scene(&cli.scene, cli.output.as_deref()),
        Some(Commands::Show { effects_file }) => show_effects(&effects_file),
    }
}

fn export_scene(scene_path: &Path, output: Option<&Path>) -> Result<()> {
    // Only the default path may be missing
    let scene = if scene_path == Path::new(DEFAULT_SCENE_PATH) {
        Scene::read_from_file_or_new(scene_path)
    } else {
        Scene::read_from_file(scene_path)
    };
    let mut scene = scene.with_context(|| format!("failed to read scene {}", scene_path.display()))?;
    scene.clamp_attributes();

    let effects = scene
        .export_effects()
        .with_context(|| format!("failed to export {}", scene_path.display()))?;

    for effect in &effects {
        debug!(kind = %effect.kind(), position = ?effect.position(), "{:?}", effect);
    }
    log_summary(&effects);

    if let Some(output) = output {
        storage::write_to_file(&effects, output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), count = effects.len(), "wrote 2dfx entries");
    }

    Ok(())
}

fn show_effects(path: &Path) -> Result<()> {
    let effects: Vec<Effect2dfx> = storage::read_from_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    for (index, effect) in effects.iter().enumerate() {
        println!("#{index} {}: {:#?}", effect.kind(), effect);
    }
    log_summary(&effects);

    Ok(())
}

fn log_summary(effects: &[Effect2dfx]) {
    for kind in EffectKind::ALL {
        let count = effects.iter().filter(|effect| effect.kind() == kind).count();
        if count > 0 {
            info!(%kind, count, "2dfx entries");
        }
    }

    info!(total = effects.len(), "export finished");
}
