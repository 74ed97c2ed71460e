pub mod constants;
pub mod keymap;
pub mod layout;
pub mod render;
pub mod terminal;
