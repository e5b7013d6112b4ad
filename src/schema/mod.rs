pub mod bucket;
pub mod game;
pub mod summary;
