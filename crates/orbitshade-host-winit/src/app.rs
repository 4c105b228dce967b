//! Setup sequence and the per-frame render loop.

use std::time::{Duration, Instant};

use orbitshade_core::{
    EngineError, FpsMeter, FrameUniforms, OrbitController, SurfaceTracker, ViewerConfig,
};
use orbitshade_runtime_glow::QuadRenderer;
use tracing::{debug, error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::gl_window::GlWindow;
use crate::loader::{load_shader_pair, ShaderLoader};
use crate::translate::InputTranslator;

/// Everything one frame needs besides the window: the camera context, the built program/quad,
/// and the surface/FPS bookkeeping.
#[derive(Debug)]
struct Viewer {
    controller: OrbitController,
    renderer: Option<QuadRenderer>,
    input: InputTranslator,
    surface: SurfaceTracker,
    fps: Option<FpsMeter>,
    title: String,
    start: Option<Instant>,
}

impl Viewer {
    fn new(cfg: &ViewerConfig, renderer: QuadRenderer, gl_window: &GlWindow) -> Self {
        let fps = cfg
            .fps
            .enabled
            .then(|| FpsMeter::new(Duration::from_millis(cfg.fps.window_ms), Instant::now()));
        Self {
            controller: OrbitController::new(),
            renderer: Some(renderer),
            input: InputTranslator::new(),
            surface: SurfaceTracker::new(gl_window.size()),
            fps,
            title: cfg.window.title.clone(),
            start: None,
        }
    }

    /// Feed a window event to the orbit controller.
    fn on_window_event(&mut self, scale_factor: f64, event: &WindowEvent<'_>) {
        if let Some(ev) = self.input.translate(scale_factor, event) {
            self.controller.handle(&ev);
        }
    }

    /// Match the GL surface to the window. Cheap when nothing changed.
    fn sync_surface(&mut self, gl_window: &GlWindow) {
        let size = gl_window.size();
        if self.surface.sync(size) {
            debug!(width = size.width, height = size.height, "resizing surface");
            gl_window.resize_surface(size);
        }
    }

    /// Render and present one frame.
    fn frame(&mut self, gl_window: &GlWindow) -> Result<(), EngineError> {
        self.sync_surface(gl_window);

        let Some(renderer) = self.renderer.as_ref() else {
            return Ok(());
        };

        let now = Instant::now();
        let start = *self.start.get_or_insert(now);
        let size = self.surface.current();
        let uniforms = FrameUniforms::new(
            size,
            now.saturating_duration_since(start),
            &self.controller.camera(),
        );

        unsafe {
            renderer.render(gl_window.gl(), size, &uniforms);
        }
        gl_window.swap_buffers()?;

        if let Some(fps) = self.fps.as_mut().and_then(|m| m.tick(now)) {
            debug!(fps, "frame rate");
            gl_window.window.set_title(&format!("{} | {fps} fps", self.title));
        }
        Ok(())
    }

    fn shutdown(&mut self, gl_window: &GlWindow) {
        if let Some(renderer) = self.renderer.take() {
            unsafe { renderer.destroy(gl_window.gl()) };
        }
    }
}

/// Open the window, build the shader program and quad, then run the render loop until the
/// window closes.
///
/// Setup failures (no GL context, unreadable shader, compile/link errors) are returned before
/// any frame is drawn. Once the loop starts this never returns; a failure to present exits the
/// process with status 1.
pub fn run(cfg: &ViewerConfig, loader: &dyn ShaderLoader) -> Result<(), EngineError> {
    let event_loop = EventLoop::new();
    let gl_window = GlWindow::new(&event_loop, &cfg.window, cfg.vsync)?;

    let sources = load_shader_pair(loader)?;
    if let Some(origin) = &sources.origin {
        info!("shaders: {origin}");
    }
    let renderer = unsafe { QuadRenderer::new(gl_window.gl(), &sources.vert, &sources.frag)? };

    let mut viewer = Viewer::new(cfg, renderer, &gl_window);
    info!("render loop started");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,

                WindowEvent::Resized(_) => {
                    viewer.sync_surface(&gl_window);
                    gl_window.window.request_redraw();
                }

                other => viewer.on_window_event(gl_window.window.scale_factor(), &other),
            },

            Event::MainEventsCleared => gl_window.window.request_redraw(),

            Event::RedrawRequested(_) => {
                if let Err(e) = viewer.frame(&gl_window) {
                    error!("{e}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }

            Event::LoopDestroyed => viewer.shutdown(&gl_window),

            _ => {}
        }
    });
}
