use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "orbit-viewer",
    version,
    about = "Full-screen fragment shader with a mouse/touch orbit camera"
)]
pub struct Args {
    /// JSON scene config. Defaults to the `scene.json` next to this demo.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Vertex shader to use instead of the one named in the config.
    #[arg(long, value_name = "FILE")]
    pub vert: Option<PathBuf>,

    /// Fragment shader to use instead of the one named in the config.
    #[arg(long, value_name = "FILE")]
    pub frag: Option<PathBuf>,

    /// Do not report frame rate in the window title.
    #[arg(long)]
    pub no_fps: bool,

    /// Present without waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    pub verbose: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
