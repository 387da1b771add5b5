//! Command to list supported path families.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use wincanon::{canonicalize, PathFamily};

/// List supported path families and how each renders a drive root.
#[derive(Args)]
pub struct FamiliesCommand {
    /// Show a sample rendering for each family
    #[arg(long)]
    pub sample: bool,
}

impl FamiliesCommand {
    /// Execute the families command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = global.build_context()?;

        for family in PathFamily::all() {
            let style = ctx.mounts().style_for(family);
            if self.sample {
                let sample_ctx = ctx.clone().with_family(family);
                let sample = canonicalize(r"C:\Users\sample", &sample_ctx)?;
                println!("{family}\t{style}\t{sample}");
            } else {
                println!("{family}\t{style}");
            }
        }

        Ok(())
    }
}
