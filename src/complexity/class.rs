//! Asymptotic complexity classes and their notation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BigOError;

/// Asymptotic time-complexity class, declared in growth order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplexityClass {
    #[default]
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)", alias = "O(n^2)")]
    Quadratic,
    #[serde(rename = "O(n³)", alias = "O(n^3)")]
    Cubic,
    #[serde(rename = "O(2^n)")]
    Exponential,
    #[serde(rename = "O(n!)")]
    Factorial,
    Unknown,
}

impl ComplexityClass {
    /// Every class in growth order, `Unknown` last.
    pub const ALL: [ComplexityClass; 9] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Cubic,
        Self::Exponential,
        Self::Factorial,
        Self::Unknown,
    ];

    /// Big-O notation, e.g. `O(n²)`.
    #[must_use]
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
            Self::Exponential => "O(2^n)",
            Self::Factorial => "O(n!)",
            Self::Unknown => "Unknown",
        }
    }

    /// Plain-word name, e.g. `quadratic`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Logarithmic => "logarithmic",
            Self::Linear => "linear",
            Self::Linearithmic => "linearithmic",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Exponential => "exponential",
            Self::Factorial => "factorial",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for ComplexityClass {
    type Err = BigOError;

    /// Accepts `O(n²)`, `O(n^2)`, `n^2`, `quadratic` and the like, ignoring
    /// case and whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let inner = compact
            .strip_prefix("o(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(&compact);

        let class = match inner {
            "1" | "constant" => Self::Constant,
            "logn" | "log(n)" | "logarithmic" => Self::Logarithmic,
            "n" | "linear" => Self::Linear,
            "nlogn" | "nlog(n)" | "n*logn" | "linearithmic" => Self::Linearithmic,
            "n²" | "n^2" | "n**2" | "quadratic" => Self::Quadratic,
            "n³" | "n^3" | "n**3" | "cubic" => Self::Cubic,
            "2^n" | "2**n" | "exponential" => Self::Exponential,
            "n!" | "factorial" => Self::Factorial,
            "unknown" | "?" => Self::Unknown,
            _ => return Err(BigOError::InvalidClass(s.to_string())),
        };
        Ok(class)
    }
}
