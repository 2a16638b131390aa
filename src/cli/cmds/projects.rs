use crate::base;
use crate::cli;

/// List projects with their matched customers and transactions
#[derive(clap::Parser)]
pub struct Projects {
    #[command(flatten)]
    input_opts: cli::sharedopts::InputOpts,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,
}

impl Projects {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let inputs = cli::util::load_inputs(fs, &self.input_opts)?;
        let stats = cli::util::filter_projects(
            &inputs.masterlist,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        )
        .into_iter()
        .map(|p| {
            let rows = p.select(&inputs.report);
            let transactions = rows.len();
            let layout = base::Layout::new(rows);
            cli::output::ProjectStat {
                name: p.name().to_string(),
                listed: p.customers().len(),
                matched: layout.customer_count(),
                transactions,
                total: layout.grand_total(),
            }
        })
        .collect();
        Ok(cli::Output::Projects(stats))
    }
}
