#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Default ranking sheet, a CSV export of the club's spreadsheet.
    /// Overridable at the entry points via the RANKING_FILE env var.
    pub data_file: &'static str,
    pub name_column: &'static str,
    pub average_column: &'static str,
    pub match_count_column: &'static str,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            data_file: "whist_ranking.csv",
            name_column: "name",
            average_column: "average",
            match_count_column: "matches",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub page_title: &'static str,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_title: "Whist Ranking",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub loader: LoaderSettings,
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            loader: LoaderSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

// Passed explicitly (dependency injection) rather than held in globals,
// so tests and the static renderer can build their own.
