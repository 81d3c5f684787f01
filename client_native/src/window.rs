use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::atomic::{self, AtomicBool};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use game_core::{Direction, Frame, Params};
use gilrs::{Event, EventType, Gilrs};
use glam::IVec2;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

use crate::draw::{draw_frame, Canvas};
use crate::error::ClientError;
use crate::input::{is_quit_key, steer_key, Steering};

pub struct WindowApp {
    window: Option<Rc<Window>>,
    _context: Option<Context<Rc<Window>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    arena: IVec2,
    frame: Frame,
    frame_rx: mpsc::Receiver<Frame>,
    gilrs: Option<Gilrs>,
    steering: Steering,
    dir_tx: mpsc::Sender<Direction>,
    exit: Arc<AtomicBool>,
    error: Option<ClientError>,
}

impl WindowApp {
    /// The first error that closed the window, if any
    pub fn into_result(self) -> Result<(), ClientError> {
        self.error.map_or(Ok(()), Err)
    }

    fn create_surface(&mut self, ev_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        // Physical pixels so one arena unit is one pixel whatever the scale factor
        let size = PhysicalSize::new(self.arena.x as u32, self.arena.y as u32);
        let attributes = Window::default_attributes()
            .with_title("Tracking Pong")
            .with_inner_size(size)
            .with_resizable(false);

        let window = Rc::new(ev_loop.create_window(attributes)?);
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;

        self.window = Some(window.clone());
        self._context = Some(context);
        self.surface = Some(surface);
        self.resize(window.inner_size())?;

        log::info!("window created");
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), ClientError> {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(()); // minimized
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height)?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), ClientError> {
        let (Some(window), Some(surface)) = (&self.window, self.surface.as_mut()) else {
            return Ok(());
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let mut buffer = surface.buffer_mut()?;
        let mut canvas = Canvas::new(&mut buffer, size.width as usize, size.height as usize);
        draw_frame(&mut canvas, &self.frame, self.arena.x, self.arena.y);
        buffer.present()?;
        Ok(())
    }

    fn handle_key(&mut self, ev_loop: &ActiveEventLoop, key: &Key, pressed: bool) {
        if pressed && is_quit_key(key) {
            self.quit(ev_loop);
            return;
        }
        let Some(steer) = steer_key(key) else {
            return;
        };

        let before = self.steering.direction();
        self.steering.key(steer, pressed);
        self.send_direction(ev_loop, before);
    }

    fn poll_gamepads(&mut self, ev_loop: &ActiveEventLoop) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };

        let before = self.steering.direction();
        while let Some(Event { id, event, .. }) = gilrs.next_event() {
            match event {
                EventType::ButtonPressed(button, _) => self.steering.pad_button(button, true),
                EventType::ButtonReleased(button, _) => self.steering.pad_button(button, false),
                EventType::Connected => {
                    log::info!("gamepad connected: {}", gilrs.gamepad(id).name());
                    self.steering.set_pads(gilrs.gamepads().count());
                }
                EventType::Disconnected => {
                    log::info!("gamepad {id:?} disconnected");
                    self.steering.set_pads(gilrs.gamepads().count());
                }
                _ => {}
            }
        }
        self.send_direction(ev_loop, before);
    }

    fn send_direction(&mut self, ev_loop: &ActiveEventLoop, before: Direction) {
        let dir = self.steering.direction();
        if dir != before && self.dir_tx.send(dir).is_err() {
            log::warn!("game thread stopped listening for input");
            self.quit(ev_loop);
        }
    }

    fn quit(&mut self, ev_loop: &ActiveEventLoop) {
        self.exit.store(true, atomic::Ordering::Relaxed);
        ev_loop.exit();
    }

    fn fail(&mut self, ev_loop: &ActiveEventLoop, err: ClientError) {
        log::error!("{err}");
        self.error.get_or_insert(err);
        self.quit(ev_loop);
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, ev_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_surface(ev_loop) {
            self.fail(ev_loop, err);
        }
    }

    fn window_event(&mut self, ev_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit(ev_loop),
            WindowEvent::Focused(false) => {
                let before = self.steering.direction();
                self.steering.release_keys();
                self.send_direction(ev_loop, before);
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.resize(size) {
                    self.fail(ev_loop, err);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(ev_loop, err);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(ev_loop, &logical_key, state == ElementState::Pressed),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, ev_loop: &ActiveEventLoop) {
        self.poll_gamepads(ev_loop);

        if let Some(frame) = self.frame_rx.try_iter().last() {
            self.frame = frame;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        if self.exit.load(atomic::Ordering::Relaxed) {
            ev_loop.exit();
        } else {
            ev_loop.set_control_flow(ControlFlow::wait_duration(Duration::from_millis(
                Params::TICK_SLEEP_MS,
            )));
        }
    }
}

pub fn init_window(
    arena: IVec2,
    first: Frame,
    frame_rx: mpsc::Receiver<Frame>,
    dir_tx: mpsc::Sender<Direction>,
    exit: Arc<AtomicBool>,
) -> Result<(EventLoop<()>, WindowApp), ClientError> {
    let ev_loop = EventLoop::new()?;
    ev_loop.set_control_flow(ControlFlow::Poll);

    // Without gamepad support the keyboard still works
    let gilrs = match Gilrs::new() {
        Ok(gilrs) => Some(gilrs),
        Err(err) => {
            log::warn!("gamepads unavailable: {err}");
            None
        }
    };
    let pads = gilrs.as_ref().map_or(0, |g| g.gamepads().count());
    if pads > 0 {
        log::info!("{pads} gamepad(s) found, keyboard steering disabled");
    }

    let app = WindowApp {
        window: None,
        _context: None,
        surface: None,
        arena,
        frame: first,
        frame_rx,
        gilrs,
        steering: Steering::new(pads),
        dir_tx,
        exit,
        error: None,
    };
    Ok((ev_loop, app))
}
