pub mod page_state;
pub mod reveal;
pub mod scroll;
