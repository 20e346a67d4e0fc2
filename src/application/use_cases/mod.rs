pub mod status_check;
pub mod sync_configs;
