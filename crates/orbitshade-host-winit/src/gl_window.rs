//! Window + OpenGL 3.3 core context creation (winit 0.28 / glutin 0.30).

use std::ffi::CString;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use orbitshade_core::{EngineError, SurfaceSize, WindowConfig};
use tracing::{info, warn};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

// raw-window-handle 0.5 traits (matches glutin 0.30)
use raw_window_handle::HasRawWindowHandle;

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

struct NoMatchingConfig;

/// The candidate with the most MSAA samples; the first one wins ties. `None` if there are none.
fn pick_config<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, c| if samples(&c) > samples(&best) { c } else { best })
}

/// A window with a current GL context and the `glow` function table loaded from it.
pub struct GlWindow {
    pub window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl: glow::Context,
}

impl std::fmt::Debug for GlWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // glutin surface/context handles are opaque platform objects.
        f.debug_struct("GlWindow")
            .field("window", &self.window.id())
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl GlWindow {
    /// Create the window and make a GL context current on it.
    ///
    /// Any failure here means the platform cannot provide the rendering context and is
    /// reported as [`EngineError::GlCreate`].
    pub fn new<T>(
        event_loop: &EventLoop<T>,
        cfg: &WindowConfig,
        vsync: bool,
    ) -> Result<Self, EngineError> {
        let window_builder = WindowBuilder::new()
            .with_title(cfg.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(cfg.width as f64, cfg.height as f64));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(0)
            .with_stencil_size(0)
            .with_transparency(false);

        let display_builder =
            glutin_winit::DisplayBuilder::new().with_window_builder(Some(window_builder));

        // The picker must hand back a config, so an empty candidate list unwinds out of `build`
        // with a private marker and is turned into an error here.
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            display_builder.build(event_loop, template, |configs| {
                match pick_config(configs, |c: &Config| c.num_samples()) {
                    Some(config) => config,
                    None => panic::resume_unwind(Box::new(NoMatchingConfig)),
                }
            })
        }));
        let (window, gl_config) = match built {
            Ok(result) => {
                result.map_err(|e| EngineError::GlCreate(format!("DisplayBuilder.build: {e}")))?
            }
            Err(payload) if payload.is::<NoMatchingConfig>() => {
                return Err(EngineError::GlCreate(
                    "no GL config matches the requested template".into(),
                ));
            }
            Err(payload) => panic::resume_unwind(payload),
        };

        let window = window
            .ok_or_else(|| EngineError::GlCreate("DisplayBuilder did not create a window".into()))?;
        let gl_display = gl_config.display();

        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));

        let fallback_context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .build(None);

        let not_current_gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .or_else(|_| gl_display.create_context(&gl_config, &fallback_context_attributes))
                .map_err(|e| EngineError::GlCreate(format!("create_context: {e}")))?
        };

        let size = window.inner_size();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            non_zero(size.width),
            non_zero(size.height),
        );

        let surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .map_err(|e| EngineError::GlCreate(format!("create_window_surface: {e}")))?
        };

        let context = not_current_gl_context
            .make_current(&surface)
            .map_err(|e| EngineError::GlCreate(format!("make_current: {e}")))?;

        if vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                warn!("vsync unavailable, rendering unthrottled: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| match CString::new(s) {
                Ok(name) => gl_display.get_proc_address(name.as_c_str()) as *const _,
                Err(_) => std::ptr::null(),
            })
        };

        info!(
            width = size.width,
            height = size.height,
            samples = gl_config.num_samples(),
            "created GL window"
        );

        Ok(Self {
            window,
            surface,
            context,
            gl,
        })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Current drawable size of the window in physical pixels.
    pub fn size(&self) -> SurfaceSize {
        let s = self.window.inner_size();
        SurfaceSize::new(s.width, s.height)
    }

    pub fn resize_surface(&self, size: SurfaceSize) {
        self.surface
            .resize(&self.context, non_zero(size.width), non_zero(size.height));
    }

    pub fn swap_buffers(&self) -> Result<(), EngineError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| EngineError::other(format!("swap_buffers: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_config_prefers_more_samples() {
        let picked = pick_config([(0, 0u8), (1, 4), (2, 2), (3, 4)].into_iter(), |c| c.1);
        assert_eq!(picked, Some((1, 4)));
    }

    #[test]
    fn pick_config_of_nothing_is_none() {
        let picked = pick_config(std::iter::empty::<(u32, u8)>(), |c| c.1);
        assert_eq!(picked, None);
    }
}
