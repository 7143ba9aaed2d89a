pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("series {series:?} has {found} entries but the chart has {expected} categories")]
    SeriesLength {
        series: String,
        expected: usize,
        found: usize,
    },

    #[error("series {series:?} refers to category {index}, but only {count} categories exist")]
    CategoryOutOfRange {
        series: String,
        index: usize,
        count: usize,
    },

    #[error("series {series:?} supplies category {index} more than once")]
    DuplicateCategory { series: String, index: usize },

    #[error("series {series:?} must provide either `values` or `entries`")]
    MissingSeriesValues { series: String },

    #[error("invalid color {value:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor { value: String },

    #[error("invalid config value at `{path}`: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("invalid chart definition JSON: {0}")]
    Json(#[from] serde_json::Error),
}
