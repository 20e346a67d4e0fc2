use anyhow::Result;
use std::io::Write;

use crate::application::services::config_service::ConfigService;

/// Handler for the generate command
pub struct GenerateCommand {
    pub service: ConfigService,
    pub solution: String,
}

impl GenerateCommand {
    pub fn new(service: ConfigService, solution: String) -> Self {
        Self { service, solution }
    }

    /// Print the rendered config exactly as `save` would write it
    pub fn execute(&self) -> Result<()> {
        let contents = self.service.config_for(&self.solution).generate()?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
