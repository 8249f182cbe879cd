//! Window event loop driving an [`ExplorerSession`].

use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::config::ExplorerConfig;
use crate::controllers::session::ExplorerSession;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::ports::input_source::InputSource;
use crate::controllers::session::ports::render_sink::SinkError;
use crate::input::gui::input_state::GuiInputState;
use crate::presenters::pixels::sink::PixelsSink;

#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create pixels surface: {0}")]
    Surface(#[from] pixels::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<SinkError> for GuiError {
    fn from(err: SinkError) -> Self {
        Self::Session(SessionError::Sink(err))
    }
}

/// Opens a canvas-sized window and runs the session until the window closes or
/// a render or display error occurs.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    let mut session = ExplorerSession::from_config(config)?;
    let canvas_size = session.settings().canvas_size;
    let poll_interval = session.settings().poll_interval;

    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Zoom")
            .with_inner_size(PhysicalSize::new(canvas_size, canvas_size))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let mut input = GuiInputState::new(size.width, size.height);
    let mut sink = PixelsSink::new(window, canvas_size)?;

    session.start(&mut sink)?;
    info!("explorer window open, {canvas_size}x{canvas_size} canvas");

    let mut failure: Option<GuiError> = None;

    event_loop.run(|event, elwt| {
        let result: Result<(), GuiError> = match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            ..
                        },
                    ..
                } => {
                    input.handle_key_event(key_code, state);
                    Ok(())
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.handle_mouse_button(button, state);
                    Ok(())
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.handle_cursor_moved(position.x, position.y);
                    window.request_redraw();
                    Ok(())
                }
                WindowEvent::CursorLeft { .. } => {
                    input.handle_cursor_left();
                    window.request_redraw();
                    Ok(())
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                    Ok(())
                }
                WindowEvent::Resized(size) => {
                    input.resize(size.width, size.height);
                    sink.resize(size.width, size.height).map_err(GuiError::from)
                }
                WindowEvent::RedrawRequested => {
                    let zoom_box = input
                        .has_pointer()
                        .then(|| session.model().zoom_box(input.pointer_position()));
                    sink.set_zoom_box(zoom_box);
                    sink.redraw().map_err(GuiError::from)
                }
                _ => Ok(()),
            },
            Event::AboutToWait => {
                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + poll_interval));
                session
                    .step(&input, &mut sink)
                    .map(|outcome| {
                        if outcome.zoom_factor_changed {
                            window.request_redraw();
                        }
                    })
                    .map_err(GuiError::from)
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            error!("stopping explorer: {err}");
            failure = Some(err);
            elwt.exit();
        }
    })?;

    failure.map_or(Ok(()), Err)
}
