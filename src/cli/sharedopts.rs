#[derive(clap::Args)]
pub struct InputOpts {
    /// Workbook mapping projects to customers
    ///
    /// Must have a 'Project' and a 'Name' column. A name is either a full
    /// customer key such as 'C001 - Acme Corp', or a customer name alone.
    pub masterlist: std::path::PathBuf,

    /// Workbook of transactions
    ///
    /// Must have 'DATE', 'CODE', 'CUSTOMER', 'DOC. NO.' and 'UNIT PRICE'
    /// columns. Header case and surrounding spaces are ignored.
    pub report: std::path::PathBuf,

    /// Sheet to read from the masterlist [default: first sheet]
    #[arg(long, value_name = "SHEET")]
    pub masterlist_sheet: Option<String>,

    /// Sheet to read from the report [default: first sheet]
    #[arg(long, value_name = "SHEET")]
    pub report_sheet: Option<String>,
}

#[derive(clap::Args)]
pub struct ProjectsOpts {
    /// Wildcard patterns to match projects of interest
    ///
    /// Use commas to separate multiple patterns. A project is included if its
    /// name matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub projects: Vec<String>,

    /// Wildcard patterns to match projects to exclude
    ///
    /// Use commas to separate multiple patterns. A project is excluded if its
    /// name matches any pattern. Takes precedence over '--projects'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_projects: Vec<String>,
}
