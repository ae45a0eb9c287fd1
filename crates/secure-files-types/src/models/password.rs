//! Heuristic password strength scoring.

use serde::{Deserialize, Serialize};

/// Minimum length (in characters) that earns the length point.
const MIN_LENGTH: usize = 8;

/// Score a password from 0 to 5, one point per satisfied rule:
/// at least eight characters, an ASCII lowercase letter, an ASCII uppercase
/// letter, an ASCII digit, and a character outside `[A-Za-z0-9]`.
pub fn strength_score(password: &str) -> u8 {
    let rules = [
        password.chars().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    rules.iter().filter(|&&passed| passed).count() as u8
}

/// Feedback level shown under a password field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    #[default]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Map a score onto the five feedback levels. Scores of 4 and 5 both
    /// land on `VeryStrong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(strength_score(password))
    }

    /// Localized label.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "ضعيفة جداً",
            Self::Weak => "ضعيفة",
            Self::Medium => "متوسطة",
            Self::Strong => "قوية",
            Self::VeryStrong => "قوية جداً",
        }
    }

    /// Tailwind text color for the label.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::VeryWeak => "text-red-600",
            Self::Weak => "text-orange-600",
            Self::Medium => "text-yellow-600",
            Self::Strong => "text-green-500",
            Self::VeryStrong => "text-green-700",
        }
    }

    /// Text content of the feedback element.
    pub fn feedback_text(self) -> String {
        format!("قوة كلمة المرور: {}", self.label())
    }

    /// Full class attribute of the feedback element.
    pub fn feedback_class(self) -> String {
        format!("text-sm mt-1 {}", self.color_class())
    }
}
