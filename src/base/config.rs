/// What a run does when a project's report cannot be written.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum OnRenderError {
    /// Stop the run. Reports already written are kept.
    #[default]
    Abort,
    /// Record the failure and continue with the next project.
    Skip,
}

/// Application config.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub output_dir: std::path::PathBuf,
    pub label_header: String,
    pub font_name: String,
    pub font_size: f64,
    pub on_render_error: OnRenderError,
    pub use_colored_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "project_reports".into(),
            label_header: "110204010104 - Other Receivables".into(),
            font_name: "Arial Narrow".into(),
            font_size: 10.0,
            on_render_error: OnRenderError::default(),
            use_colored_output: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    /// The top level must be a JSON object.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let map = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(s)?;
        serde_json::from_value(serde_json::Value::Object(map))
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
