use blockfall_engine::{COLUMNS, ROWS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::{
    BoardView,
    widgets::{COLUMNS_U16, CellDisplay, ROWS_U16},
};

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    view: &'a BoardView,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(view: &'a BoardView) -> Self {
        Self { view, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        COLUMNS_U16 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        ROWS_U16 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..COLUMNS).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..ROWS).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Start);
        let vertical = Layout::vertical(row_constraints).flex(Flex::Start);

        let grid_cells = area
            .layout::<ROWS>(&vertical)
            .into_iter()
            .map(|row| row.layout::<COLUMNS>(&horizontal));

        for (row, grid_row) in grid_cells.enumerate() {
            for (col, grid_cell) in grid_row.into_iter().enumerate() {
                CellDisplay::from_color(self.view.color_at(col, row)).render(grid_cell, buf);
            }
        }
    }
}
