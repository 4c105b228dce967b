//! Host glue (policy layer).
//!
//! winit window + glutin context creation, shader resource loading, input translation and the
//! render loop. Kept apart from the runtime so the GL backend stays free of windowing concerns.
#![allow(clippy::missing_safety_doc)]

pub mod app;
pub mod gl_window;
pub mod loader;
pub mod touch;
pub mod translate;

pub use app::run;
pub use gl_window::GlWindow;
pub use loader::{load_shader_pair, FileShaderLoader, ShaderLoader, ShaderSource};
pub use touch::TouchTracker;
pub use translate::{wheel_delta_y, InputTranslator};
