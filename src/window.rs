use crate::frontend::Frontend;
use cgolview::{Frame, Input, LifeError, PointerButton, Pos2, Viewport};
use sdl2::{
    EventPump, Sdl,
    event::Event,
    keyboard::Keycode,
    mouse::MouseButton,
    pixels::Color,
    rect::Rect,
    render::{BlendMode, WindowCanvas},
};
use tracing::debug;

const TITLE: &str = "Game of Life";

/// Native window frontend, one pixel per surface pixel
pub struct WindowRender {
    // keeps the SDL context alive for as long as the canvas and event pump
    _sdl: Sdl,
    canvas: WindowCanvas,
    event_pump: EventPump,
    viewport: Viewport,
    title_status: String,
}

impl WindowRender {
    pub fn new(viewport: Viewport) -> anyhow::Result<Self> {
        let sdl = sdl2::init().map_err(LifeError::Frontend)?;
        let video_subsystem = sdl.video().map_err(LifeError::Frontend)?;

        let window = video_subsystem
            .window(TITLE, viewport.width(), viewport.height())
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_blend_mode(BlendMode::Blend);
        let event_pump = sdl.event_pump().map_err(LifeError::Frontend)?;

        debug!(
            width = viewport.width(),
            height = viewport.height(),
            "window opened"
        );
        Ok(Self {
            _sdl: sdl,
            canvas,
            event_pump,
            viewport,
            title_status: String::new(),
        })
    }

    fn button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Left),
            MouseButton::Right => Some(PointerButton::Right),
            _ => None,
        }
    }
}

impl Frontend for WindowRender {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn poll_inputs(&mut self, inputs: &mut Vec<Input>) -> anyhow::Result<()> {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape | Keycode::Q),
                    ..
                } => inputs.push(Input::Quit),

                // keybinds
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => inputs.push(Input::PauseDown),
                Event::KeyUp {
                    keycode: Some(Keycode::Space),
                    ..
                } => inputs.push(Input::PauseUp),
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => inputs.push(Input::Reset),
                Event::KeyDown {
                    keycode: Some(Keycode::T),
                    repeat: false,
                    ..
                } => inputs.push(Input::Randomize),

                // pointer
                Event::MouseMotion { x, y, .. } => inputs.push(Input::PointerMoved(Pos2::new(x, y))),
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => {
                    inputs.push(Input::PointerMoved(Pos2::new(x, y)));
                    inputs.extend(Self::button(mouse_btn).map(Input::Pressed));
                }
                Event::MouseButtonUp {
                    mouse_btn, x, y, ..
                } => {
                    inputs.push(Input::PointerMoved(Pos2::new(x, y)));
                    inputs.extend(Self::button(mouse_btn).map(Input::Released));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();

        for square in frame.squares() {
            let color = square.shade.color();
            self.canvas
                .set_draw_color(Color::RGBA(color.r, color.g, color.b, color.a));
            self.canvas
                .fill_rect(Rect::new(
                    square.origin.x,
                    square.origin.y,
                    square.side,
                    square.side,
                ))
                .map_err(LifeError::Frontend)?;
        }

        if frame.status() != self.title_status {
            self.title_status = frame.status().to_owned();
            self.canvas
                .window_mut()
                .set_title(&format!("{TITLE} - {}", self.title_status))?;
        }

        self.canvas.present();
        Ok(())
    }
}
