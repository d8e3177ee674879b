//! UI Components

mod load_banner;
mod location_form;
mod location_list;
mod map_view;
mod search_bar;

pub use load_banner::LoadBanner;
pub use location_form::LocationForm;
pub use location_list::LocationList;
pub use map_view::MapView;
pub use search_bar::SearchBar;
