//! Command to canonicalize paths.

use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use wincanon::canonicalize;

/// Canonicalize one or more paths for the target family.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Emit results as a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolvedEntry {
    input: String,
    canonical: String,
    family: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = global.build_context()?;

        let mut entries = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let canonical = canonicalize(path, &ctx)?;
            entries.push(ResolvedEntry {
                input: path.clone(),
                family: canonical.family().to_string(),
                canonical: canonical.into_string(),
            });
        }

        if self.json {
            let rendered = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::Config(e.to_string()))?;
            println!("{rendered}");
        } else {
            for entry in &entries {
                println!("{}", entry.canonical);
            }
        }

        Ok(())
    }
}
