use crate::base;

/// Filters `report` down to each project's rows and lays them out. Projects
/// with no matching rows get `None`.
pub fn layouts<'p, I>(report: &base::Report, projects: I) -> Vec<(&'p base::Project, Option<base::Layout>)>
where
    I: IntoIterator<Item = &'p base::Project>,
{
    projects
        .into_iter()
        .map(|p| {
            let rows = p.select(report);
            let layout = match rows.is_empty() {
                true => None,
                false => Some(base::Layout::new(rows)),
            };
            (p, layout)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(std::path::PathBuf),
    /// The project has no transactions in the report.
    Empty,
    /// Rendering failed and the run continued. Holds the error message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub project: String,
    pub customers: usize,
    pub grand_total: base::Amount,
    pub outcome: Outcome,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output_dir: std::path::PathBuf,
    pub projects: Vec<ProjectOutcome>,
}

impl Summary {
    pub fn written(&self) -> impl Iterator<Item = &std::path::Path> {
        self.projects.iter().filter_map(|p| match &p.outcome {
            Outcome::Written(path) => Some(path.as_path()),
            _ => None,
        })
    }

    pub fn failed_count(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| matches!(p.outcome, Outcome::Failed(_)))
            .count()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to create output directory '{}'", path.display())]
    OutputDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report for project '{project}'")]
    Render {
        project: String,
        source: base::render::RenderError,
    },
    #[error(
        "report for project '{project}' would overwrite the one for project '{first}' at '{}'",
        path.display()
    )]
    PathCollision {
        project: String,
        first: String,
        path: std::path::PathBuf,
    },
}

/// Writes one report per project, in order.
pub struct Run<'a> {
    pub fs: &'a base::Fs,
    pub renderer: base::Renderer,
    pub output_dir: std::path::PathBuf,
    pub on_render_error: base::OnRenderError,
}

impl Run<'_> {
    /// Creates the output directory, then for each project filters the
    /// report, lays out the rows and writes the workbook. Projects without
    /// rows produce no file. A render failure either ends the run or is
    /// recorded, depending on `on_render_error`; files written earlier are
    /// left in place either way. Two projects whose names sanitize to the
    /// same file name are treated the same way: the second is not written.
    pub fn run<'p, I>(&self, report: &base::Report, projects: I) -> Result<Summary, RunError>
    where
        I: IntoIterator<Item = &'p base::Project>,
    {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| RunError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut outcomes = Vec::new();
        let mut claimed = std::collections::HashMap::<std::path::PathBuf, &str>::new();
        for (project, layout) in layouts(report, projects) {
            let Some(layout) = layout else {
                outcomes.push(ProjectOutcome {
                    project: project.name().to_string(),
                    customers: 0,
                    grand_total: base::Amount::ZERO,
                    outcome: Outcome::Empty,
                });
                continue;
            };
            let path = base::Renderer::report_path(&self.output_dir, project.name());
            let result = match claimed.get(&path) {
                Some(first) => Err(RunError::PathCollision {
                    project: project.name().to_string(),
                    first: first.to_string(),
                    path: path.clone(),
                }),
                None => self
                    .renderer
                    .write(self.fs, &path, &layout)
                    .map_err(|source| RunError::Render {
                        project: project.name().to_string(),
                        source,
                    }),
            };
            let outcome = match result {
                Ok(()) => {
                    claimed.insert(path.clone(), project.name());
                    Outcome::Written(path)
                }
                Err(e) => match self.on_render_error {
                    base::OnRenderError::Abort => return Err(e),
                    base::OnRenderError::Skip => Outcome::Failed(match &e {
                        RunError::Render { source, .. } => error_chain(source),
                        e => e.to_string(),
                    }),
                },
            };
            outcomes.push(ProjectOutcome {
                project: project.name().to_string(),
                customers: layout.customer_count(),
                grand_total: layout.grand_total(),
                outcome,
            });
        }
        Ok(Summary {
            output_dir: self.output_dir.clone(),
            projects: outcomes,
        })
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        s.push_str(": ");
        s.push_str(&cause.to_string());
        source = cause.source();
    }
    s
}
