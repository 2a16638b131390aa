use clap::builder::TypedValueParser;

use crate::base;
use crate::cli;

/// Write one report workbook per project
#[derive(clap::Parser)]
pub struct Run {
    #[command(flatten)]
    input_opts: cli::sharedopts::InputOpts,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,

    /// Directory to write reports to, created if absent [default: from config]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<std::path::PathBuf>,

    /// What to do when a report cannot be written [default: from config]
    #[arg(long, value_name = "POLICY")]
    #[arg(value_parser(
        clap::builder::PossibleValuesParser::new(<base::OnRenderError as strum::VariantNames>::VARIANTS)
            .map(|s| s.parse::<base::OnRenderError>().expect("should be parseable"))
    ))]
    on_render_error: Option<base::OnRenderError>,
}

impl Run {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let inputs = cli::util::load_inputs(fs, &self.input_opts)?;
        let projects = cli::util::filter_projects(
            &inputs.masterlist,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        );
        let output_dir = self.output_dir.as_ref().unwrap_or(&config.output_dir);
        let run = base::pipeline::Run {
            fs,
            renderer: base::Renderer::new(config),
            output_dir: fs.resolve(output_dir),
            on_render_error: self.on_render_error.unwrap_or(config.on_render_error),
        };
        let summary = run.run(&inputs.report, projects)?;
        Ok(cli::Output::Summary {
            summary,
            color: config.use_colored_output,
        })
    }
}
