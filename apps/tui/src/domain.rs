use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapabilityCategory {
    A,
    B,
    C,
    D,
    E,
}

impl CapabilityCategory {
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Category A",
            Self::B => "Category B",
            Self::C => "Category C",
            Self::D => "Category D",
            Self::E => "Category E",
        }
    }
}

/// Retail-demand tier of a location: either settled in one category or
/// moving between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Capability {
    Single(CapabilityCategory),
    Transition {
        from: CapabilityCategory,
        to: CapabilityCategory,
    },
}

impl Capability {
    /// Accepts `"D"`, `"A → B"`, `"A->B"` and `"A>B"`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        for separator in ["→", "->", ">"] {
            if let Some((from, to)) = value.split_once(separator) {
                return Some(Self::Transition {
                    from: CapabilityCategory::parse(from)?,
                    to: CapabilityCategory::parse(to)?,
                });
            }
        }

        CapabilityCategory::parse(value).map(Self::Single)
    }

    /// The category a badge is styled after: the starting tier of a transition.
    pub const fn primary(self) -> CapabilityCategory {
        match self {
            Self::Single(category) | Self::Transition { from: category, .. } => category,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(category) => write!(f, "{}", category.as_str()),
            Self::Transition { from, to } => write!(f, "{} → {}", from.as_str(), to.as_str()),
        }
    }
}

impl TryFrom<String> for Capability {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid capability category: {value:?}"))
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::VeryLow | Self::Low => Tone::Favorable,
            Self::Moderate => Tone::Caution,
            Self::High => Tone::Alert,
        }
    }
}

/// Presentation hint for a risk badge; the renderer picks the colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Favorable,
    Caution,
    Alert,
}
