use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "st")]
#[command(about = "Agile sprint tracker terminal client")]
#[command(version)]
pub struct Cli {
    /// Server URL (overrides config file and ST_SERVER_URL)
    #[arg(long)]
    pub server: Option<String>,

    /// Fetch and import GitHub issues live instead of using the sample set
    #[arg(long)]
    pub github_live: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut st_config::Config) {
        if let Some(ref server) = self.server {
            config.server.url = server.clone();
        }
        if self.github_live {
            config.github.live_import = true;
        }
        if let Some(ref level) = self.log_level
            && let Ok(parsed) = level.parse()
        {
            config.logging.level = parsed;
        }
        if let Some(ref file) = self.log_file {
            config.logging.file = Some(file.display().to_string());
        }
    }
}
