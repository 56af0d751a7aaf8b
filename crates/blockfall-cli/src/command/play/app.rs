use std::time::Duration;

use blockfall_engine::{Engine, GameEvent, GameInput};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;

use crate::{
    tui::{App, Runtime},
    view::{
        BoardView,
        widgets::{PlayDisplay, PlayStatus},
    },
};

#[derive(Debug)]
pub struct PlayApp {
    engine: Engine,
    tick_interval: Duration,
    is_paused: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(engine: Engine, tick_interval: Duration) -> Self {
        Self {
            engine,
            tick_interval,
            is_paused: false,
            is_exiting: false,
        }
    }

    /// Returns the score if the game reached its end.
    pub fn final_score(&self) -> Option<usize> {
        self.engine.final_score()
    }

    fn status(&self) -> PlayStatus {
        if let Some(score) = self.engine.final_score() {
            PlayStatus::GameOver { score }
        } else if self.is_paused {
            PlayStatus::Paused
        } else {
            PlayStatus::Playing
        }
    }

    fn toggle_pause(&mut self, runtime: &mut Runtime) {
        self.is_paused = !self.is_paused;
        let interval = (!self.is_paused).then_some(self.tick_interval);
        runtime.set_tick_interval(interval);
    }
}

fn input_for_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Left => Some(GameInput::MoveLeft),
        KeyCode::Right => Some(GameInput::MoveRight),
        KeyCode::Up => Some(GameInput::Rotate),
        KeyCode::Down => Some(GameInput::HardDrop),
        _ => None,
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(self.tick_interval));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Only explicit exit keys dismiss the result.
        if self.engine.is_game_over() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                self.is_exiting = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('p') => self.toggle_pause(runtime),
            code if !self.is_paused => {
                if let Some(input) = input_for_key(code) {
                    self.engine.step(GameEvent::from(input));
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let mut view = BoardView::new();
        self.engine.render(&mut view);
        frame.render_widget(PlayDisplay::new(&view, self.status()), frame.area());
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if self.is_paused {
            return;
        }
        self.engine.step(GameEvent::Tick);
        if self.engine.is_game_over() && runtime.tick_interval().is_some() {
            runtime.set_tick_interval(None);
        }
    }
}
