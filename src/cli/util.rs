use anyhow::Context;

use crate::base;
use crate::cli;

/// Both inputs, parsed and normalized.
pub struct Inputs {
    pub masterlist: base::Masterlist,
    pub report: base::Report,
}

/// Checks that both input files exist, then loads the masterlist and loads
/// and normalizes the report. Relative paths are resolved against the working
/// directory.
pub fn load_inputs(fs: &base::Fs, opts: &cli::sharedopts::InputOpts) -> anyhow::Result<Inputs> {
    let masterlist_path = fs.resolve(&opts.masterlist);
    let report_path = fs.resolve(&opts.report);
    base::loader::ensure_exists(&[&masterlist_path, &report_path])?;

    let table = base::loader::load_table(&masterlist_path, opts.masterlist_sheet.as_deref())
        .with_context(|| format!("failed to read masterlist '{}'", opts.masterlist.display()))?;
    let masterlist = base::masterlist::parse(&table)?;

    let table = base::loader::load_table(&report_path, opts.report_sheet.as_deref())
        .with_context(|| format!("failed to read report '{}'", opts.report.display()))?;
    let report = base::normalize::normalize(&table)?;

    Ok(Inputs { masterlist, report })
}

/// Returns the projects of `masterlist`, in order, such that each project:
/// - Matches any wildcard pattern in 'patterns'
/// - Does not match any wildcard pattern in 'not_patterns'
pub fn filter_projects<'a, T, U>(
    masterlist: &'a base::Masterlist,
    patterns: &[T],
    not_patterns: &[U],
) -> Vec<&'a base::Project>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    masterlist
        .iter()
        .filter(|p| {
            incl.iter().any(|w| w.matches(p.name())) && !excl.iter().any(|w| w.matches(p.name()))
        })
        .collect()
}
