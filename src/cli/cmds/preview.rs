use crate::base;
use crate::cli;

/// Print each project's report as text without writing files
#[derive(clap::Parser)]
pub struct Preview {
    #[command(flatten)]
    input_opts: cli::sharedopts::InputOpts,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,
}

impl Preview {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let inputs = cli::util::load_inputs(fs, &self.input_opts)?;
        let projects = cli::util::filter_projects(
            &inputs.masterlist,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        );
        let layouts = base::pipeline::layouts(&inputs.report, projects)
            .into_iter()
            .filter_map(|(p, layout)| Some((p.name().to_string(), layout?)))
            .collect();
        Ok(cli::Output::Preview {
            label_header: config.label_header.clone(),
            layouts,
        })
    }
}
