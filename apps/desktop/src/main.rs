mod controls;

use anyhow::Result;
use clap::Parser;
use controls::OrbitControls;
use cubefield_render_wgpu::WgpuRenderer;
use cubefield_scene::{
    CameraConfig, LightingConfig, OrbitCamera, RendererConfig, SceneConfig, SceneState,
};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "cubefield", about = "Orbiting cube field viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// RNG seed for the cube field (defaults to a time-derived seed)
    #[arg(long)]
    seed: Option<u64>,
}

/// Application state outside the GPU handles.
struct AppState {
    scene: SceneState,
    camera: OrbitCamera,
    controls: OrbitControls,
    renderer_config: RendererConfig,
    lighting: LightingConfig,
    started: Instant,
}

impl AppState {
    fn new(seed: u64) -> Self {
        let scene = SceneState::new(SceneConfig::default(), seed);
        let camera = OrbitCamera::new(&CameraConfig::default());
        let controls = OrbitControls::new(&camera);
        Self {
            scene,
            camera,
            controls,
            renderer_config: RendererConfig::default(),
            lighting: LightingConfig::default(),
            started: Instant::now(),
        }
    }

    /// One frame of scene work: controls first, then the scene update that
    /// spins the cubes and places the camera on its orbit.
    fn update(&mut self) {
        self.controls.update(&mut self.camera);
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.scene.advance(&mut self.camera, now_ms);
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Space {
            self.scene.set_spin_active(pressed);
        }
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
}

impl GpuApp {
    fn new(seed: u64) -> Self {
        Self {
            state: AppState::new(seed),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Cube Field")
            .with_inner_size(PhysicalSize::new(
                self.state.renderer_config.width,
                self.state.renderer_config.height,
            ));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubefield_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_aspect(size.width, size.height);

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            &self.state.renderer_config,
            &self.state.lighting,
            self.state.scene.cubes().len() as u32,
            size.width,
            size.height,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.set_aspect(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                    tracing::debug!(width = config.width, height = config.height, "resized");
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.state.controls.handle_mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.controls.handle_mouse_move(position);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.controls.handle_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                self.state.update();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        self.state.scene.cubes(),
                    );
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    tracing::info!(seed, "cubefield starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(seed);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_key_toggles_spin() {
        let mut state = AppState::new(42);
        assert!(!state.scene.spin_active());
        state.handle_key(KeyCode::Space, true);
        assert!(state.scene.spin_active());
        state.handle_key(KeyCode::Space, false);
        assert!(!state.scene.spin_active());
    }

    #[test]
    fn other_keys_do_not_affect_spin() {
        let mut state = AppState::new(42);
        state.handle_key(KeyCode::KeyW, true);
        assert!(!state.scene.spin_active());
    }

    #[test]
    fn update_places_camera_on_orbit() {
        let mut state = AppState::new(42);
        state.update();
        let p = state.camera.position;
        // x/z lie on the 20-unit orbit circle regardless of elapsed time
        assert!(((p.x * p.x + p.z * p.z).sqrt() - 20.0).abs() < 1e-3);
        assert_eq!(state.camera.target, glam::Vec3::ZERO);
    }
}
