pub mod cloudbuild_config;
pub mod extra_config;
pub mod generator_settings;
