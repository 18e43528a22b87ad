//! UI Components

mod edit_page;
mod info_panel;
mod map_page;
mod map_surface;

pub use edit_page::EditPage;
pub use info_panel::InfoPanel;
pub use map_page::MapPage;
pub use map_surface::MapSurface;
