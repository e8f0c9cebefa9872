mod keyhint_bar;
mod layout;
mod render;
mod search_bar;
mod table;

pub use render::render_ui;
