/// UI building blocks
///
/// - The search field and its buttons (search_bar.rs)
/// - The scrollable card grid (grid.rs)

pub mod grid;
pub mod search_bar;
