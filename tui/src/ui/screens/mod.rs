pub mod form;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::form::FormState;

#[derive(Debug, PartialEq)]
pub enum Action {
    None,
    Quit,
}

pub enum Screen {
    Form(FormState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form(s) => form::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Form(s) => form::handle_key(s, key),
        }
    }
}
