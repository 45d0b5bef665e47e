pub mod controls;
pub mod history;
pub mod joke;

pub use controls::{FilterControls, SearchBar};
pub use history::RecentSearchesPanel;
pub use joke::ResultArea;
