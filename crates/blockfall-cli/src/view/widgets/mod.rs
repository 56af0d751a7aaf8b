use blockfall_engine::{COLUMNS, ROWS};
use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, cell_display::*, key_binding_display::*, play_display::*};

mod board_display;
mod cell_display;
mod key_binding_display;
mod play_display;

#[expect(clippy::cast_possible_truncation)]
const COLUMNS_U16: u16 = COLUMNS as u16;
#[expect(clippy::cast_possible_truncation)]
const ROWS_U16: u16 = ROWS as u16;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const PURPLE: Color = Color::Rgb(127, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use blockfall_engine::PieceColor;
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);

    pub const BLUE_CELL: Style = bg_only(color::BLUE);
    pub const RED_CELL: Style = bg_only(color::RED);
    pub const YELLOW_CELL: Style = bg_only(color::YELLOW);
    pub const GREEN_CELL: Style = bg_only(color::GREEN);
    pub const PURPLE_CELL: Style = bg_only(color::PURPLE);
    pub const ORANGE_CELL: Style = bg_only(color::ORANGE);
    pub const CYAN_CELL: Style = bg_only(color::CYAN);

    pub const fn piece(color: PieceColor) -> Style {
        match color {
            PieceColor::Blue => BLUE_CELL,
            PieceColor::Red => RED_CELL,
            PieceColor::Yellow => YELLOW_CELL,
            PieceColor::Green => GREEN_CELL,
            PieceColor::Purple => PURPLE_CELL,
            PieceColor::Orange => ORANGE_CELL,
            PieceColor::Cyan => CYAN_CELL,
        }
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
