//! Command implementations.

pub mod batch;
pub mod config;
pub mod insert;
pub mod languages;
pub mod render;
pub mod show;
pub mod update;

pub use self::config::execute_config;
pub use self::insert::execute_insert;
pub use self::languages::execute_languages;
pub use self::render::execute_render;
pub use self::show::execute_show;
pub use self::update::execute_update;
