#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! Backend-agnostic core of the orbit viewer: camera, gesture handling, frame values, config.
//!
//! Nothing here touches a window or a GL context; hosts feed [`InputEvent`]s in and read
//! [`FrameUniforms`] out.

pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod input;

pub use camera::{CameraState, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN};
pub use config::{
    load_viewer_config, parse_viewer_config, FpsConfig, ViewerConfig, WindowConfig, FRAG_ID,
    VERT_ID,
};
pub use error::{EngineError, ShaderStage};
pub use frame::{FpsMeter, FrameUniforms, SurfaceSize, SurfaceTracker};
pub use gesture::{GestureState, OrbitController};
pub use input::{InputEvent, Point};
