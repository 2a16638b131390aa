use crate::base;
use crate::base::column::MasterlistColumn;

/// A project and the customers assigned to it in the masterlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    customers: Vec<base::CustomerRef>,
}

impl Project {
    pub fn new<I, S>(name: &str, customers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut project = Self {
            name: name.to_string(),
            customers: Vec::new(),
        };
        for c in customers {
            project.add(c.as_ref());
        }
        project
    }

    fn add(&mut self, customer: &str) {
        let r = base::CustomerRef::from(customer);
        if !self.customers.contains(&r) {
            self.customers.push(r);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customers(&self) -> &[base::CustomerRef] {
        &self.customers
    }

    pub fn is_eligible(&self, key: &base::CustomerKey) -> bool {
        self.customers.iter().any(|c| c.matches(key))
    }

    /// Rows of `report` belonging to this project, in report order. Rows with
    /// no customer key never belong to a project.
    pub fn select<'a>(&self, report: &'a base::Report) -> Vec<&'a base::ReportRow> {
        report
            .iter()
            .filter(|r| r.key().is_some_and(|k| self.is_eligible(k)))
            .collect()
    }
}

/// Projects in order of first appearance in the masterlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masterlist(Vec<Project>);

impl Masterlist {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.0.iter().find(|p| p.name == name)
    }
}

impl FromIterator<Project> for Masterlist {
    fn from_iter<T: IntoIterator<Item = Project>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads the masterlist table. Rows with no project or no name are ignored.
/// Neither value is trimmed.
pub fn parse(table: &base::Table) -> Result<Masterlist, base::SchemaError> {
    let cols = base::column::Resolved::<MasterlistColumn>::new(table)?;
    let mut projects = Vec::<Project>::new();
    let mut index = std::collections::HashMap::<String, usize>::new();
    for i in 0..table.len() {
        let project = table.cell(i, cols.get(MasterlistColumn::Project)).to_text();
        let name = table.cell(i, cols.get(MasterlistColumn::Name)).to_text();
        let (Some(project), Some(name)) = (project, name) else {
            continue;
        };
        let j = *index.entry(project.clone()).or_insert_with(|| {
            projects.push(Project::new(&project, None::<&str>));
            projects.len() - 1
        });
        projects[j].add(&name);
    }
    Ok(Masterlist(projects))
}
