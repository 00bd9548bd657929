/// State management module
///
/// This module handles all application state, including:
/// - The book view model (data.rs)
/// - Query text, results and request generations (search.rs)

pub mod data;
pub mod search;
