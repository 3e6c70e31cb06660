use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use log::{debug, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use gridcaster::config::Config;
use gridcaster::input::Command;
use gridcaster::render;
use gridcaster::scaler::{StretchLut, blit_stretch};
use gridcaster::session::Session;
use gridcaster::EngineResult;

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    session: Session,
    title: String,

    // Render target at the configured resolution; stretched to the window
    frame: Vec<u32>,
    frame_w: usize,
    frame_h: usize,
    stretch_lut: StretchLut,
    lut_size: (usize, usize),

    keys_down: HashSet<KeyCode>,

    frame_counter: u32,
    last_fps_log: Instant,
}

impl App {
    fn new(config: &Config) -> Self {
        let session = Session::from_config(config);
        let (frame_w, frame_h) = session.screen_size();
        Self {
            window: None,
            surface: None,
            session,
            title: config.display.title.clone(),

            frame: vec![0; frame_w * frame_h],
            frame_w,
            frame_h,
            stretch_lut: StretchLut::empty(),
            lut_size: (0, 0),

            keys_down: HashSet::new(),

            frame_counter: 0,
            last_fps_log: Instant::now(),
        }
    }

    /// Apply one command per currently held key.
    fn pump_commands(&mut self) {
        let commands: Vec<Command> = self
            .keys_down
            .iter()
            .filter_map(|&key| Command::for_key(key))
            .collect();
        for command in commands {
            self.session.apply(command);
        }
    }

    fn ensure_lut(&mut self, dst_w: usize, dst_h: usize) {
        if self.lut_size != (dst_w, dst_h) {
            self.stretch_lut = StretchLut::build(dst_w, dst_h, self.frame_w, self.frame_h);
            self.lut_size = (dst_w, dst_h);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(self.frame_w as f64, self.frame_h as f64));

        let window = Rc::new(event_loop.create_window(attributes).expect("create window"));

        let context = softbuffer::Context::new(window.clone()).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, window.clone()).expect("softbuffer surface");

        let size = window.inner_size();
        self.ensure_lut(size.width as usize, size.height as usize);

        self.surface = Some(surface);
        self.window = Some(window);

        self.window.as_ref().unwrap().request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.session.apply(Command::Quit);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => {
                            self.keys_down.insert(code);
                        }
                        ElementState::Released => {
                            self.keys_down.remove(&code);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // Mutate the pose between frames only, never mid-render
                self.pump_commands();
                if !self.session.is_running() {
                    event_loop.exit();
                    return;
                }

                let size = match &self.window {
                    Some(window) if window.id() == id => window.inner_size(),
                    _ => return,
                };
                let (dw, dh) = (size.width as usize, size.height as usize);
                if dw == 0 || dh == 0 {
                    return; // Minimized window, skip drawing
                }
                self.ensure_lut(dw, dh);

                let commands = self.session.frame();
                render::rasterize(&mut self.frame, self.frame_w, self.frame_h, &commands);

                let Some(surface) = self.surface.as_mut() else {
                    return;
                };
                surface
                    .resize(
                        NonZeroU32::new(dw as u32).unwrap(),
                        NonZeroU32::new(dh as u32).unwrap(),
                    )
                    .unwrap();

                let mut buf = surface.buffer_mut().expect("buffer_mut");
                blit_stretch(&mut buf, dw, &self.frame, self.frame_w, &self.stretch_lut);
                buf.present().unwrap();

                self.frame_counter += 1;
                let now = Instant::now();
                if now.duration_since(self.last_fps_log).as_secs_f32() >= 1.0 {
                    let fps = self.frame_counter as f32
                        / now.duration_since(self.last_fps_log).as_secs_f32();
                    debug!("fps: {fps:.1}");
                    self.frame_counter = 0;
                    self.last_fps_log = now;
                }

                self.window.as_ref().unwrap().request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                self.ensure_lut(new_size.width as usize, new_size.height as usize);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> EngineResult<()> {
    env_logger::init();

    let config = Config::load_or_default("config.toml");
    info!("starting gridcaster v{}", gridcaster::VERSION);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(&config);
    event_loop.run_app(&mut app)?;

    // Window and surface are dropped with the app once the loop exits
    info!("session ended");
    Ok(())
}
