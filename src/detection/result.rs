//! Detection result types decoded from the service's JSON replies

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::DetectionMethod;

/// Overall answer for an uploaded recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Synthetic or cloned voice
    Fake,
    /// Genuine human voice
    Real,
    /// The service could not decide (`is_fake` null or missing)
    Uncertain,
}

impl Verdict {
    pub fn from_flag(is_fake: Option<bool>) -> Self {
        match is_fake {
            Some(true) => Verdict::Fake,
            Some(false) => Verdict::Real,
            None => Verdict::Uncertain,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Fake => "🚨",
            Verdict::Real => "✅",
            Verdict::Uncertain => "❓",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Fake => "FAKE DETECTED",
            Verdict::Real => "REAL VOICE",
            Verdict::Uncertain => "UNCERTAIN",
        }
    }

    /// Class list applied to the result text element
    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Fake => "result-text result-fake",
            Verdict::Real => "result-text result-real",
            Verdict::Uncertain => "result-text",
        }
    }

    /// Terminal symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::Fake => "✗",
            Verdict::Real => "✓",
            Verdict::Uncertain => "?",
        }
    }

    /// Binary prediction used in exports: 1 = fake, 0 = anything else
    pub fn prediction(&self) -> u8 {
        match self {
            Verdict::Fake => 1,
            Verdict::Real | Verdict::Uncertain => 0,
        }
    }
}

/// Relative weighting of the two hybrid components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridWeights {
    #[serde(alias = "rule_weight")]
    pub rule: Option<f64>,
    #[serde(alias = "ml_weight")]
    pub ml: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HybridScores {
    #[serde(default)]
    pub rule_score: Option<f64>,
    #[serde(default)]
    pub ml_score: Option<f64>,
    #[serde(default)]
    pub weights: Option<HybridWeights>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MlScores {
    #[serde(default)]
    pub lr_score: Option<f64>,
    #[serde(default)]
    pub svm_score: Option<f64>,
}

/// Method-specific breakdown, keyed by the reported method tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MethodDetails {
    /// Rule-based feature analysis, passed through untouched
    Rule(Map<String, Value>),
    Ml(MlScores),
    Hybrid(HybridScores),
    /// Unrecognised method tag, or no details supplied
    Unlisted,
}

impl MethodDetails {
    fn decode(method: Option<DetectionMethod>, details: Option<Value>) -> Result<Self, serde_json::Error> {
        let details = match details {
            Some(Value::Null) | None => {
                return Ok(match method {
                    Some(DetectionMethod::Rule) => MethodDetails::Rule(Map::new()),
                    _ => MethodDetails::Unlisted,
                })
            }
            Some(value) => value,
        };

        Ok(match method {
            Some(DetectionMethod::Hybrid) => MethodDetails::Hybrid(serde_json::from_value(details)?),
            Some(DetectionMethod::Ml) => MethodDetails::Ml(serde_json::from_value(details)?),
            Some(DetectionMethod::Rule) => match details {
                Value::Object(map) => MethodDetails::Rule(map),
                _ => MethodDetails::Rule(Map::new()),
            },
            None => MethodDetails::Unlisted,
        })
    }
}

/// Success payload as it arrives on the wire
#[derive(Debug, Deserialize)]
struct WireResult {
    #[serde(default)]
    is_fake: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    score: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    confidence: Option<Value>,
    method: String,
    #[serde(default)]
    details: Option<Value>,
}

/// Keeps an explicit `null` apart from a missing key (missing stays `None`)
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Numeric coercion the page applies before display: `null` is 0, a missing
/// or non-numeric value is NaN. Malformed numbers are shown, not rejected.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::String(s)) => match s.trim() {
            "" => 0.0,
            t => t.parse().unwrap_or(f64::NAN),
        },
        Some(_) => f64::NAN,
    }
}

/// Decoded result of one detection request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub verdict: Verdict,
    /// Likelihood of the voice being synthetic (0..1), NaN when missing
    pub score: f64,
    /// Certainty of the score itself (0..1), NaN when missing
    pub confidence: f64,
    /// Method tag exactly as reported by the service
    pub method_tag: String,
    pub details: MethodDetails,
}

impl DetectionResult {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let wire: WireResult = serde_json::from_value(value)?;
        let method = DetectionMethod::from_tag(&wire.method);
        if method.is_none() {
            log::debug!("Method tag '{}' has no breakdown", wire.method);
        }

        Ok(Self {
            verdict: Verdict::from_flag(wire.is_fake),
            score: coerce_number(wire.score.as_ref()),
            confidence: coerce_number(wire.confidence.as_ref()),
            details: MethodDetails::decode(method, wire.details)?,
            method_tag: wire.method,
        })
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Method selected by the reported tag (exact match only)
    pub fn method(&self) -> Option<DetectionMethod> {
        DetectionMethod::from_tag(&self.method_tag)
    }
}

/// Failure payload (`{"error": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Decode leniently: any JSON that is not an error object yields no message
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}
