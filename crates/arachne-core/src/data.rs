//! Immutable chart data: category labels plus the series plotted against them.
//!
//! A [`ChartData`] is validated once on construction and never mutated afterwards; updating a
//! chart means building a new one and handing it over wholesale.

use crate::color::{Color, default_series_color};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which value axis a series is scaled against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// One value of a series. The category index is the entry's only identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub value: f64,
    pub category_index: usize,
}

impl Entry {
    pub fn new(value: f64, category_index: usize) -> Self {
        Self {
            value,
            category_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetStyle {
    pub visible: bool,
    pub fill_enabled: bool,
    /// Fill opacity, 0 (transparent) to 255 (opaque).
    pub fill_alpha: u8,
    /// Fill color; the first series color when unset.
    pub fill_color: Option<Color>,
    /// Outline width in logical units.
    pub line_width: f64,
    /// Per-point colors, cycled by point index. Empty means "use the palette".
    pub colors: Vec<Color>,
    pub draw_values: bool,
    pub value_text_color: Color,
    /// Fractional digits for value labels; the chart-wide default formatter when unset.
    pub value_decimals: Option<usize>,
}

impl Default for DataSetStyle {
    fn default() -> Self {
        Self {
            visible: true,
            fill_enabled: false,
            fill_alpha: 85,
            fill_color: None,
            line_width: 2.5,
            colors: Vec::new(),
            draw_values: true,
            value_text_color: Color::BLACK,
            value_decimals: None,
        }
    }
}

/// A labeled series of values, one per category.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    label: String,
    entries: Vec<Entry>,
    axis_dependency: AxisDependency,
    style: DataSetStyle,
    y_min: Option<f64>,
    y_max: Option<f64>,
}

impl DataSet {
    pub fn new(label: impl Into<String>, entries: Vec<Entry>) -> Self {
        let (y_min, y_max) = finite_bounds(entries.iter().map(|e| e.value));
        Self {
            label: label.into(),
            entries,
            axis_dependency: AxisDependency::Left,
            style: DataSetStyle::default(),
            y_min,
            y_max,
        }
    }

    /// Series whose `j`-th value belongs to category `j`.
    pub fn from_values(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Entry::new(v, i))
            .collect();
        Self::new(label, entries)
    }

    pub fn with_style(mut self, style: DataSetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_axis_dependency(mut self, dependency: AxisDependency) -> Self {
        self.axis_dependency = dependency;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis_dependency
    }

    pub fn style(&self) -> &DataSetStyle {
        &self.style
    }

    pub fn is_visible(&self) -> bool {
        self.style.visible
    }

    /// Smallest finite value, if any.
    pub fn y_min(&self) -> Option<f64> {
        self.y_min
    }

    /// Largest finite value, if any.
    pub fn y_max(&self) -> Option<f64> {
        self.y_max
    }

    pub fn entry_for_category(&self, category_index: usize) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.category_index == category_index)
    }

    /// Color of point `j`; the palette color of `series_index` when no colors were given.
    pub fn color_at(&self, j: usize, series_index: usize) -> Color {
        if self.style.colors.is_empty() {
            default_series_color(series_index)
        } else {
            self.style.colors[j % self.style.colors.len()]
        }
    }

    pub fn fill_color(&self, series_index: usize) -> Color {
        self.style
            .fill_color
            .unwrap_or_else(|| self.color_at(0, series_index))
    }

    /// Checks the "exactly one value per category" invariant against `category_count`.
    fn validate(&self, category_count: usize) -> Result<()> {
        let mut seen = vec![false; category_count];
        for e in &self.entries {
            let Some(slot) = seen.get_mut(e.category_index) else {
                return Err(Error::CategoryOutOfRange {
                    series: self.label.clone(),
                    index: e.category_index,
                    count: category_count,
                });
            };
            if *slot {
                return Err(Error::DuplicateCategory {
                    series: self.label.clone(),
                    index: e.category_index,
                });
            }
            *slot = true;
        }
        if self.entries.len() != category_count {
            return Err(Error::SeriesLength {
                series: self.label.clone(),
                expected: category_count,
                found: self.entries.len(),
            });
        }
        Ok(())
    }
}

/// Category labels plus every series of one chart snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    categories: Vec<String>,
    data_sets: Vec<DataSet>,
}

impl ChartData {
    pub fn new(categories: Vec<String>, data_sets: Vec<DataSet>) -> Result<Self> {
        for set in &data_sets {
            set.validate(categories.len())?;
        }
        tracing::debug!(
            categories = categories.len(),
            series = data_sets.len(),
            "chart data built"
        );
        Ok(Self {
            categories,
            data_sets,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing to plot (no categories).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn category_label(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    pub fn data_sets(&self) -> &[DataSet] {
        &self.data_sets
    }

    pub fn data_set(&self, index: usize) -> Option<&DataSet> {
        self.data_sets.get(index)
    }

    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    /// Average label length in characters, 0 without categories.
    pub fn average_category_label_length(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        let total: usize = self.categories.iter().map(|c| c.chars().count()).sum();
        total as f64 / self.categories.len() as f64
    }

    /// Smallest finite value, optionally restricted to series on `axis`.
    ///
    /// A restriction that matches no series falls back to the other axis. Without any finite
    /// value the result is 0.
    pub fn y_min(&self, axis: Option<AxisDependency>) -> f64 {
        self.bounds_for(axis).0
    }

    /// Largest finite value; same filtering rules as [`ChartData::y_min`].
    pub fn y_max(&self, axis: Option<AxisDependency>) -> f64 {
        self.bounds_for(axis).1
    }

    fn bounds_for(&self, axis: Option<AxisDependency>) -> (f64, f64) {
        let pick = |filter: Option<AxisDependency>| {
            let sets = self
                .data_sets
                .iter()
                .filter(|s| filter.is_none_or(|a| s.axis_dependency == a));
            let lo = sets.clone().filter_map(|s| s.y_min).reduce(f64::min);
            let hi = sets.filter_map(|s| s.y_max).reduce(f64::max);
            lo.zip(hi)
        };
        pick(axis)
            .or_else(|| pick(None))
            .unwrap_or((0.0, 0.0))
    }

    /// Every entry plotted at `category_index`, paired with its series index.
    pub fn entries_at_category(&self, category_index: usize) -> Vec<(usize, &Entry)> {
        self.data_sets
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.entry_for_category(category_index).map(|e| (i, e)))
            .collect()
    }
}

fn finite_bounds(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values
        .filter(|v| v.is_finite())
        .fold((None, None), |(lo, hi), v| {
            (
                Some(lo.map_or(v, |l: f64| l.min(v))),
                Some(hi.map_or(v, |h: f64| h.max(v))),
            )
        })
}
