//! Native front end: a winit window drawn with wgpu, with an egui "Play" button.

use crate::animator::ChainAnimator;
use crate::config::AnimatorConfig;
use crate::error::{Error, Result};
use crate::render::{GpuContext, GpuRenderer};
use crate::scheduler::{FrameHandler, FrameScheduler, SystemClock};
use glam::Vec2;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Everything a frame touches. Populated once the window exists.
#[derive(Default)]
struct Stage {
    window: Option<Arc<Window>>,
    context: Option<GpuContext>,
    renderer: Option<GpuRenderer>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    animator: Option<ChainAnimator>,
}

impl Stage {
    fn init(&mut self, event_loop: &ActiveEventLoop, config: &AnimatorConfig) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Reptile")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = pollster::block_on(GpuContext::new(window.clone()))?;
        let renderer = GpuRenderer::new(&context, config.palette.background);
        let animator = ChainAnimator::new(config.clone(), context.viewport())?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx,
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&context.device, context.format(), None, 1, false);

        self.window = Some(window);
        self.context = Some(context);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);
        self.animator = Some(animator);
        Ok(())
    }

    fn draw(&mut self) {
        let (
            Some(window),
            Some(context),
            Some(renderer),
            Some(egui_state),
            Some(egui_renderer),
            Some(animator),
        ) = (
            self.window.as_ref(),
            self.context.as_ref(),
            self.renderer.as_mut(),
            self.egui_state.as_mut(),
            self.egui_renderer.as_mut(),
            self.animator.as_mut(),
        )
        else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = egui_state.take_egui_input(window);
        let egui_ctx = egui_state.egui_ctx().clone();
        let show_play = !animator.is_active();
        let mut play_clicked = false;

        let full_output = egui_ctx.run(raw_input, |ctx| {
            if show_play {
                egui::Area::new(egui::Id::new("play_button"))
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        if ui.button(egui::RichText::new("Play").size(32.0)).clicked() {
                            play_clicked = true;
                        }
                    });
            }
        });

        if play_clicked {
            animator.activate();
        }

        egui_state.handle_platform_output(window, full_output.platform_output);
        let clipped_primitives =
            egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        renderer.render(context, &view, &animator.draw_list());

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Egui Encoder"),
        });
        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );
        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }
        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        output.present();
    }
}

impl FrameHandler for Stage {
    fn update(&mut self, dt: f32) {
        if let Some(animator) = &mut self.animator {
            animator.update(dt);
        }
    }

    fn render(&mut self) {
        self.draw();
    }
}

struct App {
    config: AnimatorConfig,
    scheduler: FrameScheduler<SystemClock>,
    stage: Stage,
    error: Option<Error>,
}

impl App {
    fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            scheduler: FrameScheduler::new(SystemClock::new()),
            stage: Stage::default(),
            error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stage.window.is_some() {
            return;
        }
        if let Err(e) = self.stage.init(event_loop, &self.config) {
            log::error!("failed to initialise renderer: {e}");
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.stage.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(egui_state), Some(window)) = (&mut self.stage.egui_state, &self.stage.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.stage.context {
                    context.resize(size);
                    if let Some(animator) = &mut self.stage.animator {
                        animator.resize(context.viewport());
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(animator) = &mut self.stage.animator {
                    animator.pointer_moved(Vec2::new(position.x as f32, position.y as f32));
                }
            }

            WindowEvent::RedrawRequested => {
                self.scheduler.tick(&mut self.stage);
                if let Some(window) = &self.stage.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

/// Opens the window and runs until it is closed.
pub fn run(config: AnimatorConfig) -> Result<()> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
