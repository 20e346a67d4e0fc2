pub mod config_file;
pub mod settings_store;
pub mod solution_catalog;
