mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use orbitshade_core::{load_viewer_config, EngineError, ViewerConfig, FRAG_ID, VERT_ID};
use orbitshade_host_winit::FileShaderLoader;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn default_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scene.json")
}

/// Load the scene config and apply command-line overrides on top of it.
fn build_config(args: &Args) -> Result<ViewerConfig, EngineError> {
    let path = args.config.clone().unwrap_or_else(default_config_path);
    let mut cfg = load_viewer_config(&path)?;

    // Paths given on the command line are relative to the working directory, not the config.
    if let Some(vert) = &args.vert {
        cfg.set_shader(VERT_ID, absolute(vert)?);
    }
    if let Some(frag) = &args.frag {
        cfg.set_shader(FRAG_ID, absolute(frag)?);
    }
    if args.no_fps {
        cfg.fps.enabled = false;
    }
    if args.no_vsync {
        cfg.vsync = false;
    }
    Ok(cfg)
}

fn absolute(path: &Path) -> Result<PathBuf, EngineError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    let result = build_config(&args).and_then(|cfg| {
        let loader = FileShaderLoader::new(&cfg);
        orbitshade_host_winit::run(&cfg, &loader)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
