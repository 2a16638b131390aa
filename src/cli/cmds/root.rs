use anyhow::Context;

use crate::base;
use crate::cli;

/// Per-project receivables reports from a masterlist and a report workbook
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Run(cli::cmds::run::Run),
    Preview(cli::cmds::preview::Preview),
    Projects(cli::cmds::projects::Projects),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Run(cmd) => cmd.run(&config, fs),
            Commands::Preview(cmd) => cmd.run(&config, fs),
            Commands::Projects(cmd) => cmd.run(fs),
        }
    }
}
