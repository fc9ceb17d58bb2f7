use std::time::{Duration, Instant};

use cgmath::Point2;
use fps_counter::FPSCounter;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

use crate::{
    game::{Game, Update},
    renderer::Frame,
    text::Text,
    Error,
};

const NANOS_PER_MILLI: u128 = 1_000_000;

#[derive(Debug)]
pub struct FramePacer {
    step: Duration,
    lag: Duration,
    max_steps: u32,
    carried_nanos: u128,
}

impl FramePacer {
    pub fn new(rate: u32, max_steps: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / rate.max(1),
            lag: Duration::ZERO,
            max_steps: max_steps.max(1),
            carried_nanos: 0,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> Vec<u32> {
        self.lag += dt;

        let mut steps = vec![];
        while self.lag >= self.step {
            if steps.len() as u32 == self.max_steps {
                // A single-step pacer only coalesces, falling behind is expected.
                if self.max_steps > 1 {
                    log::warn!("Running {:?} behind, skipping it", self.lag);
                }
                self.lag = Duration::ZERO;
                break;
            }
            self.lag -= self.step;

            self.carried_nanos += self.step.as_nanos();
            let elapsed_ms = self.carried_nanos / NANOS_PER_MILLI;
            self.carried_nanos %= NANOS_PER_MILLI;
            steps.push(elapsed_ms as u32);
        }
        steps
    }
}

struct FpsOverlay {
    counter: FPSCounter,
    text: Text,
}

impl FpsOverlay {
    fn new(game: &Game) -> Self {
        let text = Text::new(
            game.ctx.spritesets.s8x8.clone(),
            Point2::new(0, 0),
            8,
            1,
            0,
        );
        Self {
            counter: FPSCounter::new(),
            text,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let fps = self.counter.tick();
        self.text.set_text(format!("FPS:{}", fps));
        self.text.draw(frame);
    }
}

pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&mut self, mut game: Game) -> Result<(), Error> {
        let config = game.ctx.config.clone();
        let event_loop = EventLoop::new();
        let mut input_helper = WinitInputHelper::new();

        let window = {
            let size = LogicalSize::new(
                config.window_size.width as f64,
                config.window_size.height as f64,
            );
            WindowBuilder::new()
                .with_title(&config.title)
                .with_inner_size(size)
                .with_resizable(false)
                .with_visible(false)
                .build(&event_loop)?
        };

        let mut pixels = {
            let window_size = window.inner_size();
            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, &window);
            Pixels::new(
                config.virtual_size.width,
                config.virtual_size.height,
                surface_texture,
            )?
        };
        let mut frame = Frame::new(config.virtual_size)?;
        let mut fps = config.show_fps.then(|| FpsOverlay::new(&game));

        let mut updates = FramePacer::new(config.update_rate, config.max_updates_per_frame);
        let mut draws = FramePacer::new(config.draw_rate, 1);

        // Enter the first state before anything gets drawn.
        game.update(0)?;

        window.set_visible(true);
        log::info!(
            "{} running at {}x{}, {} updates per second",
            config.title,
            config.virtual_size.width,
            config.virtual_size.height,
            config.update_rate
        );

        let mut time = Instant::now();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            if let Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } = event
            {
                game.stop();
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Event::RedrawRequested(_) = event {
                if let Err(error) = render(&game, &mut frame, &mut pixels, fps.as_mut()) {
                    log::error!("Rendering failed: {}", error);
                    game.stop();
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            if input_helper.update(&event) {
                if input_helper.key_pressed(VirtualKeyCode::Escape) {
                    game.stop();
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                if let Some(size) = input_helper.window_resized() {
                    if let Err(error) = pixels.resize_surface(size.width, size.height) {
                        log::error!("Resizing failed: {}", error);
                        game.stop();
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }

                let now = Instant::now();
                let dt = now.duration_since(time);
                time = now;

                for elapsed_ms in updates.advance(dt) {
                    match game.update(elapsed_ms) {
                        Ok(Update::Continue) => {}
                        Ok(Update::Exit) => {
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        Err(error) => {
                            log::error!("Update failed: {}", error);
                            game.stop();
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                    }
                }

                if !draws.advance(dt).is_empty() {
                    window.request_redraw();
                }
            }
        });
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn render(
    game: &Game,
    frame: &mut Frame,
    pixels: &mut Pixels,
    fps: Option<&mut FpsOverlay>,
) -> Result<(), Error> {
    game.draw(frame)?;
    if let Some(fps) = fps {
        fps.draw(frame);
    }
    frame.copy_to(pixels.frame_mut())?;
    pixels.render()?;
    Ok(())
}
