use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Execute the completions command: emit a completion script to stdout.
pub fn execute(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "nt", &mut std::io::stdout());
}
