//! Metrics record produced per graph

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar metric that may be mathematically undefined for a given graph.
///
/// `Undefined` is an expected result (zero degree variance, empty component,
/// no nodes) and is kept distinct from `0.0`, which is a valid value.
/// Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Undefined,
}

impl Metric {
    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Metric::Value(_))
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Metric::Undefined, Metric::Value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{}", v),
            Metric::Undefined => write!(f, "undefined"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => serializer.serialize_f64(*v),
            Metric::Undefined => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Metric::from)
    }
}

/// A present key always holds a metric; `null` is `Undefined`, not `None`.
fn present_metric<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Metric>, D::Error> {
    Metric::deserialize(deserializer).map(Some)
}

/// Flat summary of one network.
///
/// Field names on the wire follow the usual network-science shorthand
/// (`n`, `m`, `k`, `S`, `C`, `r`, `ell`). Fields that do not apply to the
/// graph's directedness are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub name: String,
    pub directed: bool,
    /// Node count
    pub n: usize,
    /// Edge count, parallel edges included
    pub m: usize,
    pub density: f64,

    /// Mean degree `2m/n` (undirected)
    #[serde(default, deserialize_with = "present_metric", skip_serializing_if = "Option::is_none")]
    pub k: Option<Metric>,
    /// Mean in-degree `m/n` (directed)
    #[serde(default, deserialize_with = "present_metric", skip_serializing_if = "Option::is_none")]
    pub k_in: Option<Metric>,
    /// Mean out-degree `m/n` (directed)
    #[serde(default, deserialize_with = "present_metric", skip_serializing_if = "Option::is_none")]
    pub k_out: Option<Metric>,

    #[serde(rename = "S_largest_component")]
    pub largest_component_fraction: f64,
    #[serde(rename = "C_avg_clustering")]
    pub avg_clustering: Metric,
    #[serde(rename = "r_assortativity")]
    pub assortativity: Metric,
    /// `None` when estimation was not requested
    #[serde(
        rename = "ell_avg_distance_est",
        default,
        deserialize_with = "present_metric",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_distance: Option<Metric>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_in_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_in_deg: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_out_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_out_deg: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_deg: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MetricsRecord {
        MetricsRecord {
            name: "ppi".to_string(),
            directed: false,
            n: 4,
            m: 3,
            density: 0.5,
            k: Some(Metric::Value(1.5)),
            k_in: None,
            k_out: None,
            largest_component_fraction: 1.0,
            avg_clustering: Metric::Value(0.0),
            assortativity: Metric::Undefined,
            avg_distance: None,
            max_in_node: None,
            max_in_deg: None,
            max_out_node: None,
            max_out_deg: None,
            max_node: Some("a".to_string()),
            max_deg: Some(2),
        }
    }

    #[test]
    fn test_undefined_serializes_as_null_and_zero_stays_zero() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["r_assortativity"], serde_json::Value::Null);
        assert_eq!(json["C_avg_clustering"], serde_json::json!(0.0));
        assert_eq!(json["k"], serde_json::json!(1.5));
    }

    #[test]
    fn test_inapplicable_fields_are_omitted() {
        let json = serde_json::to_value(record()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("k_in"));
        assert!(!object.contains_key("max_out_node"));
        assert!(!object.contains_key("ell_avg_distance_est"));
        assert!(object.contains_key("max_node"));
    }

    #[test]
    fn test_json_round_trip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let back: MetricsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_undefined_survives_round_trip() {
        let original = MetricsRecord {
            n: 0,
            m: 0,
            density: 0.0,
            k: Some(Metric::Undefined),
            largest_component_fraction: 0.0,
            avg_clustering: Metric::Undefined,
            avg_distance: Some(Metric::Undefined),
            max_node: None,
            max_deg: None,
            ..record()
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(r#""ell_avg_distance_est":null"#));

        let back: MetricsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.k, Some(Metric::Undefined));
        assert_eq!(back.avg_distance, Some(Metric::Undefined));
        assert_eq!(back.k_in, None);
        assert_eq!(back, original);
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::Value(0.5).to_string(), "0.5");
        assert_eq!(Metric::Undefined.to_string(), "undefined");
        assert_eq!(Metric::from(None), Metric::Undefined);
        assert!(!Metric::Undefined.is_defined());
        assert_eq!(Metric::Value(1.0).value(), Some(1.0));
    }
}
