pub mod selection;
pub mod tui;
