use std::fmt;

/// Which dialog field receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Label,
    Value,
    Expiration,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Label => Field::Value,
            Field::Value => Field::Expiration,
            Field::Expiration => Field::Label,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Field::Label => Field::Expiration,
            Field::Value => Field::Label,
            Field::Expiration => Field::Value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Label => write!(f, "LABEL"),
            Field::Value => write!(f, "VALUE"),
            Field::Expiration => write!(f, "DELETE AFTER"),
        }
    }
}
