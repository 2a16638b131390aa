use crate::base;

/// Per-project counts shown by the `projects` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStat {
    pub name: String,
    /// Customers named in the masterlist.
    pub listed: usize,
    /// Customers with at least one transaction.
    pub matched: usize,
    pub transactions: usize,
    pub total: base::Amount,
}

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Summary {
        summary: base::pipeline::Summary,
        color: bool,
    },
    Preview {
        label_header: String,
        layouts: Vec<(String, base::Layout)>,
    },
    Projects(Vec<ProjectStat>),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Summary { summary, color } => fmt_summary(f, summary, *color),
            Output::Preview {
                label_header,
                layouts,
            } => {
                if layouts.is_empty() {
                    return writeln!(f, "No projects with transactions.");
                }
                for (i, (project, layout)) in layouts.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", project)?;
                    write!(f, "{}", layout.to_text(label_header))?;
                }
                Ok(())
            }
            Output::Projects(stats) => {
                if stats.is_empty() {
                    return writeln!(f, "No projects.");
                }
                for s in stats {
                    writeln!(
                        f,
                        "{}: {} of {} customers, {} transactions, total {}",
                        s.name, s.matched, s.listed, s.transactions, s.total
                    )?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_summary(
    f: &mut std::fmt::Formatter<'_>,
    summary: &base::pipeline::Summary,
    color: bool,
) -> std::fmt::Result {
    use base::pipeline::Outcome;

    let paint = |s: String, c: colored::Color| match color {
        true => colored::Colorize::color(s.as_str(), c).to_string(),
        false => s,
    };
    for p in &summary.projects {
        match &p.outcome {
            Outcome::Written(path) => writeln!(f, "Wrote '{}'", path.display())?,
            Outcome::Empty => writeln!(
                f,
                "{}",
                paint(
                    format!("Skipped '{}': no matching transactions", p.project),
                    colored::Color::Yellow
                )
            )?,
            Outcome::Failed(msg) => writeln!(
                f,
                "{}",
                paint(
                    format!("Failed '{}': {}", p.project, msg),
                    colored::Color::Red
                )
            )?,
        }
    }
    let written = summary.written().count();
    write!(
        f,
        "{} report{} written to '{}'",
        written,
        if written == 1 { "" } else { "s" },
        summary.output_dir.display()
    )?;
    match summary.failed_count() {
        0 => writeln!(f),
        n => writeln!(f, ", {} failed", n),
    }
}
