pub use self::board_view::BoardView;

mod board_view;
pub mod widgets;
