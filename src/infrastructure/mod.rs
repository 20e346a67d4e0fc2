/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Generated config files (read, write, remove)
/// - Settings file and template loading
/// - Solution discovery under `k8s/`
pub mod filesystem;
