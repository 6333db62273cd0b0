use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "trade-area", version, about = "Retail trade area dashboard")]
pub struct CliArgs {
    /// Print the comparison report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Include the detail report for one location (headless only)
    #[arg(long, value_name = "ID")]
    pub location: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.catalog {
            std::env::set_var("CATALOG_PATH", path);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_flags() {
        let args = CliArgs::parse_from([
            "trade-area",
            "--headless",
            "--json",
            "--location",
            "willow_place",
        ]);
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.location.as_deref(), Some("willow_place"));
        assert!(args.catalog.is_none());
    }

    #[test]
    fn help_lists_catalog_option() {
        assert!(CliArgs::help_text().contains("--catalog"));
    }
}
