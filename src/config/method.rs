// src/config/method.rs
//
// Detection strategies offered by the service

use serde::{Deserialize, Serialize};

/// Detection strategy requested with an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// Heuristics against reference recordings of real voices
    Rule,
    /// Trained classifiers (logistic regression + SVM)
    Ml,
    /// Weighted blend of rule-based and ML scores
    #[default]
    Hybrid,
}

impl DetectionMethod {
    pub fn all() -> Vec<Self> {
        vec![Self::Rule, Self::Ml, Self::Hybrid]
    }

    /// Value sent in the `method` form field
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Ml => "ml",
            Self::Hybrid => "hybrid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Rule => "Rule-based acoustic heuristics",
            Self::Ml => "Logistic regression and SVM classifiers",
            Self::Hybrid => "Rule-based and ML scores combined",
        }
    }

    /// Exact method tag of a reply. Only `rule`, `ml` and `hybrid` select a
    /// breakdown; long forms such as `ml-based` do not.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rule" => Some(Self::Rule),
            "ml" => Some(Self::Ml),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// Lenient parse for user input (CLI flags, config files).
    ///
    /// Accepts the long `rule-based` / `ml-based` spellings and any case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rule" | "rule-based" | "rule_based" => Some(Self::Rule),
            "ml" | "ml-based" | "ml_based" => Some(Self::Ml),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.form_value())
    }
}

impl std::str::FromStr for DetectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown detection method: {}", s))
    }
}
