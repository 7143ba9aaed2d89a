use crate::{Error, Result};
use serde_json::{Map, Value, json};

/// Chart configuration tree.
///
/// A JSON object addressed with dotted paths (`radialAxis.labelCount`). Callers layer overrides on
/// top of [`ChartConfig::defaults`] with [`ChartConfig::deep_merge`] and then resolve typed options
/// from the merged tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig(Value);

impl Default for ChartConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ChartConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Built-in defaults for every recognized key.
    pub fn defaults() -> Self {
        Self(json!({
            "width": 400,
            "height": 400,
            "density": 1.0,
            "rotation": 270,
            "minOffset": 10,
            "extraOffsets": { "left": 0, "top": 0, "right": 0, "bottom": 0 },
            "noDataText": "No chart data available.",
            "noDataDescription": null,
            "touchEnabled": true,
            "maxTouchDistance": 50,
            "web": {
                "draw": true,
                "lineWidth": 1.5,
                "innerLineWidth": 0.75,
                "color": "#7a7a7a",
                "innerColor": "#7a7a7a",
                "alpha": 150
            },
            "radialAxis": {
                "enabled": true,
                "drawLabels": true,
                "drawTopLabel": true,
                "labelCount": 6,
                "min": null,
                "max": null,
                "startAtZero": true,
                "showOnlyMinMax": false,
                "spaceTop": 10,
                "spaceBottom": 10,
                "textSize": 10,
                "textColor": "#000000",
                "xOffset": 10
            },
            "categoryAxis": {
                "enabled": true,
                "drawLabels": true,
                "textSize": 10,
                "textColor": "#000000",
                "spaceBetweenLabels": 0
            },
            "values": {
                "textSize": 8,
                "offset": 5
            }
        }))
    }

    /// Defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut cfg = Self::defaults();
        cfg.deep_merge(overrides);
        cfg
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    /// Numeric lookup. `null` and missing keys both read as `None`.
    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.get(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
    }

    pub fn f64_or(&self, dotted_path: &str, default: f64) -> f64 {
        self.get_f64(dotted_path).unwrap_or(default)
    }

    pub fn bool_or(&self, dotted_path: &str, default: bool) -> bool {
        self.get_bool(dotted_path).unwrap_or(default)
    }

    /// Non-negative integer lookup; fractional values are truncated, negatives clamp to 0.
    pub fn usize_or(&self, dotted_path: &str, default: usize) -> usize {
        match self.get_f64(dotted_path) {
            Some(v) if v.is_finite() => v.max(0.0) as usize,
            _ => default,
        }
    }

    /// Alpha channel lookup, clamped to `0..=255`.
    pub fn alpha_or(&self, dotted_path: &str, default: u8) -> u8 {
        match self.get_f64(dotted_path) {
            Some(v) if v.is_finite() => v.clamp(0.0, 255.0).round() as u8,
            _ => default,
        }
    }

    pub fn color_or(
        &self,
        dotted_path: &str,
        default: crate::Color,
    ) -> Result<crate::Color> {
        match self.get_str(dotted_path) {
            Some(s) => s.parse(),
            None => Ok(default),
        }
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        // Anything can come in through `from_value`; coerce to an object rather than panic.
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    /// Applies a `path=value` override. The value is read as JSON when it parses, otherwise as a
    /// plain string (`web.color=#ff0000`).
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let Some((path, raw)) = assignment.split_once('=') else {
            return Err(Error::InvalidConfig {
                path: assignment.to_string(),
                message: "expected `path=value`".to_string(),
            });
        };
        let path = path.trim();
        if path.is_empty() || path.split('.').any(str::is_empty) {
            return Err(Error::InvalidConfig {
                path: path.to_string(),
                message: "empty path segment".to_string(),
            });
        }
        let raw = raw.trim();
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| json!(raw));
        self.set_value(path, value);
        Ok(())
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_expose_typed_lookups() {
        let cfg = ChartConfig::defaults();
        assert_eq!(cfg.usize_or("radialAxis.labelCount", 0), 6);
        assert_eq!(cfg.f64_or("rotation", 0.0), 270.0);
        assert!(cfg.bool_or("radialAxis.startAtZero", false));
        assert_eq!(cfg.get_f64("radialAxis.min"), None);
        assert_eq!(cfg.alpha_or("web.alpha", 0), 150);
    }

    #[test]
    fn deep_merge_keeps_sibling_keys() {
        let cfg = ChartConfig::with_overrides(&json!({"radialAxis": {"labelCount": 3}}));
        assert_eq!(cfg.usize_or("radialAxis.labelCount", 0), 3);
        assert_eq!(cfg.f64_or("radialAxis.spaceTop", 0.0), 10.0);
    }

    #[test]
    fn overrides_parse_json_or_fall_back_to_strings() {
        let mut cfg = ChartConfig::defaults();
        cfg.apply_override("radialAxis.max=250").unwrap();
        cfg.apply_override("web.color=#ff0000").unwrap();
        cfg.apply_override("new.branch.flag=true").unwrap();
        assert_eq!(cfg.get_f64("radialAxis.max"), Some(250.0));
        assert_eq!(cfg.get_str("web.color"), Some("#ff0000"));
        assert_eq!(cfg.get_bool("new.branch.flag"), Some(true));
        assert!(cfg.apply_override("nonsense").is_err());
        assert!(cfg.apply_override("a..b=1").is_err());
    }

    #[test]
    fn set_value_recovers_from_non_object_roots() {
        let mut cfg = ChartConfig::from_value(json!(42));
        cfg.set_value("a.b", json!(1));
        assert_eq!(cfg.get_f64("a.b"), Some(1.0));
    }

    #[test]
    fn color_lookup_reports_bad_values() {
        let cfg = ChartConfig::with_overrides(&json!({"web": {"color": "grey"}}));
        assert!(cfg.color_or("web.color", crate::Color::BLACK).is_err());
        assert_eq!(
            cfg.color_or("web.missing", crate::Color::BLACK).unwrap(),
            crate::Color::BLACK
        );
    }
}
