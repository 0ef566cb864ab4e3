//! Jamb program: pressed pads light up

use launchpad_protocol::Color;

use crate::config::ProgramConfig;
use crate::grid::State;
use crate::render::Renderer;
use crate::runtime::{Effect, Message, Program};

/// Lights each pressed button with the configured press color
pub struct JambProgram<R: Renderer> {
    config: ProgramConfig,
    renderer: R,
}

impl<R: Renderer> JambProgram<R> {
    /// Program with the default configuration
    pub fn new(renderer: R) -> Self {
        Self::with_config(ProgramConfig::default(), renderer)
    }

    pub fn with_config(config: ProgramConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn press_color(&self) -> Color {
        self.config.press.fixed()
    }
}

impl<R: Renderer> Program for JambProgram<R> {
    type Message = Message;

    fn init(&self) -> State {
        State::new()
    }

    fn update(&self, state: &State, msg: Message) -> (State, Option<Effect<Message>>) {
        match msg {
            Message::Press(position) => {
                let mut next = state.clone();
                next.at_mut(position).color = self.press_color();
                (next, None)
            }
            Message::Release(_) => (state.clone(), None),
        }
    }

    fn view(&mut self, state: &State) {
        if let Err(_e) = self.renderer.render(state) {
            #[cfg(feature = "defmt")]
            defmt::warn!("render failed: {}", _e);
        }
    }
}
