//! Pure helpers shared by the controllers and views.

pub mod date_utils;
pub mod file_utils;
