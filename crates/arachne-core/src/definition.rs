//! JSON chart definitions: categories, series and an optional config overlay.

use crate::color::Color;
use crate::config::ChartConfig;
use crate::data::{AxisDependency, ChartData, DataSet, DataSetStyle, Entry};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDefinition {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    series: Vec<RawSeries>,
    #[serde(default)]
    config: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeries {
    #[serde(default)]
    label: String,
    #[serde(default)]
    values: Option<Vec<Option<f64>>>,
    #[serde(default)]
    entries: Option<Vec<RawEntry>>,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    fill: Option<bool>,
    #[serde(default)]
    fill_alpha: Option<u8>,
    #[serde(default)]
    fill_color: Option<Color>,
    #[serde(default)]
    line_width: Option<f64>,
    #[serde(default)]
    colors: Vec<Color>,
    #[serde(default)]
    draw_values: Option<bool>,
    #[serde(default)]
    value_text_color: Option<Color>,
    #[serde(default)]
    value_decimals: Option<usize>,
    #[serde(default)]
    axis: AxisDependency,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawEntry {
    value: Option<f64>,
    index: usize,
}

/// A parsed chart definition: validated data plus the merged configuration.
#[derive(Debug, Clone)]
pub struct ChartDefinition {
    pub data: ChartData,
    pub config: ChartConfig,
}

impl ChartDefinition {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawDefinition = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawDefinition = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDefinition) -> Result<Self> {
        let data_sets = raw
            .series
            .into_iter()
            .map(RawSeries::into_data_set)
            .collect::<Result<Vec<_>>>()?;
        let data = ChartData::new(raw.categories, data_sets)?;

        let mut config = ChartConfig::defaults();
        match raw.config.as_ref() {
            None | Some(Value::Null) => {}
            Some(overlay @ Value::Object(_)) => config.deep_merge(overlay),
            Some(_) => {
                return Err(Error::InvalidConfig {
                    path: "config".to_string(),
                    message: "expected an object".to_string(),
                });
            }
        }
        Ok(Self { data, config })
    }
}

impl RawSeries {
    fn into_data_set(self) -> Result<DataSet> {
        let entries: Vec<Entry> = match (self.values, self.entries) {
            (Some(values), _) => values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Entry::new(v.unwrap_or(f64::NAN), i))
                .collect(),
            (None, Some(entries)) => entries
                .into_iter()
                .map(|e| Entry::new(e.value.unwrap_or(f64::NAN), e.index))
                .collect(),
            (None, None) => {
                return Err(Error::MissingSeriesValues { series: self.label });
            }
        };

        let defaults = DataSetStyle::default();
        let style = DataSetStyle {
            visible: self.visible.unwrap_or(defaults.visible),
            fill_enabled: self.fill.unwrap_or(defaults.fill_enabled),
            fill_alpha: self.fill_alpha.unwrap_or(defaults.fill_alpha),
            fill_color: self.fill_color,
            line_width: self
                .line_width
                .filter(|w| w.is_finite() && *w >= 0.0)
                .unwrap_or(defaults.line_width),
            colors: self.colors,
            draw_values: self.draw_values.unwrap_or(defaults.draw_values),
            value_text_color: self.value_text_color.unwrap_or(defaults.value_text_color),
            value_decimals: self.value_decimals,
        };

        Ok(DataSet::new(self.label, entries)
            .with_style(style)
            .with_axis_dependency(self.axis))
    }
}
