//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell
//! completion scripts for bash, zsh, fish, and PowerShell.

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Binary name from Cargo.toml package name
const BIN_NAME: &str = "wincanon";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   wincanon completions bash > ~/.local/share/bash-completion/completions/wincanon"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(wincanon completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   wincanon completions zsh > ~/.zsh/completions/_wincanon");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(wincanon completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!(
                    "#   wincanon completions fish > ~/.config/fish/completions/wincanon.fish"
                );
                eprintln!("# Or add to config.fish:");
                eprintln!("#   wincanon completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   wincanon completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   wincanon completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
