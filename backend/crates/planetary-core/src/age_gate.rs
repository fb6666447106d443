//! Age gate behind the `/params` and `/url_variables` greetings.

/// Youngest age that is welcomed
pub const MINIMUM_AGE: i64 = 18;

/// Outcome of checking a visitor's age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCheck {
    Welcome,
    TooYoung,
}

impl AgeCheck {
    pub fn for_age(age: i64) -> Self {
        if age < MINIMUM_AGE {
            Self::TooYoung
        } else {
            Self::Welcome
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, Self::Welcome)
    }

    /// Greeting shown to the visitor
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::Welcome => format!("Welcome {}, you are old enough!", name),
            Self::TooYoung => format!("Sorry, {}, you are not old enough", name),
        }
    }
}
