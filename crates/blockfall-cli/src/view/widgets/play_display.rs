use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Widget},
};

use crate::view::{
    BoardView,
    widgets::{BoardDisplay, KeyBinding, KeyBindingDisplay, color, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↑"], "Rotate"),
    (&["↓"], "Drop"),
    (&["P"], "Pause"),
    (&["Q"], "Quit"),
];

/// What the play screen is showing besides the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStatus {
    Playing,
    Paused,
    GameOver { score: usize },
}

/// The play screen: the bordered board with its score title, the key help
/// below it, and a popup while paused or after the game ends.
#[derive(Debug)]
pub struct PlayDisplay<'a> {
    view: &'a BoardView,
    status: PlayStatus,
}

impl<'a> PlayDisplay<'a> {
    pub fn new(view: &'a BoardView, status: PlayStatus) -> Self {
        Self { view, status }
    }
}

impl Widget for PlayDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PlayDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.status {
            PlayStatus::Playing => color::WHITE,
            PlayStatus::Paused => color::YELLOW,
            PlayStatus::GameOver { .. } => color::RED,
        };

        let board = BoardDisplay::new(self.view).block(
            Block::bordered()
                .title(Line::from(self.view.title()).centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let help = KeyBindingDisplay::new(KEY_BINDINGS);

        let [board_area, help_area] = Layout::vertical([
            Constraint::Length(board.height()),
            Constraint::Length(KeyBindingDisplay::height()),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [board_area] = Layout::horizontal([Constraint::Length(board.width())])
            .flex(Flex::Center)
            .areas(board_area);

        let board_width = board.width();
        board.render(board_area, buf);
        help.render(help_area, buf);

        let score_line;
        let popup: Option<(Vec<&str>, Style)> = match self.status {
            PlayStatus::Playing => None,
            PlayStatus::Paused => Some((
                vec!["PAUSED"],
                Style::new().fg(color::BLACK).bg(color::YELLOW),
            )),
            PlayStatus::GameOver { score } => {
                score_line = format!("Your Score is {score}");
                Some((
                    vec!["GAME OVER!", score_line.as_str(), "Press Enter to exit"],
                    Style::new().fg(color::WHITE).bg(color::RED),
                ))
            }
        };

        if let Some((lines, style)) = popup {
            #[expect(clippy::cast_possible_truncation)]
            let text_height = lines.len() as u16;
            let block = Block::new().style(style);
            let text = Text::from_iter(lines).style(style).centered();
            let area = board_area.centered(
                Constraint::Length(board_width),
                Constraint::Length(text_height + 2),
            );
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(text_height)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::Surface as _;

    use super::*;

    fn render(status: PlayStatus) -> Vec<String> {
        let mut view = BoardView::new();
        view.set_title("SCORES: 30");
        let area = Rect::new(0, 0, 60, 26);
        let mut buf = Buffer::empty(area);
        PlayDisplay::new(&view, status).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_playing_shows_title_and_help() {
        let lines = render(PlayStatus::Playing);
        assert!(lines.iter().any(|line| line.contains("SCORES: 30")));
        assert!(lines.iter().any(|line| line.contains("↑ Rotate")));
        assert!(!lines.iter().any(|line| line.contains("PAUSED")));
    }

    #[test]
    fn test_paused_shows_popup() {
        let lines = render(PlayStatus::Paused);
        assert!(lines.iter().any(|line| line.contains("PAUSED")));
    }

    #[test]
    fn test_game_over_shows_final_score() {
        let lines = render(PlayStatus::GameOver { score: 30 });
        assert!(lines.iter().any(|line| line.contains("GAME OVER!")));
        assert!(lines.iter().any(|line| line.contains("Your Score is 30")));
        assert!(lines.iter().any(|line| line.contains("Press Enter to exit")));
    }
}
