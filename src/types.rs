//! Shared types: the parsed `Dimensions` pair and the recognized `Flag`s.

/// Height and width as parsed from the command line.
///
/// Either field is `0.0` when its flag never appeared. No range checks are
/// applied, so negative, zero and non-finite values pass through.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub height: f32,
    pub width: f32,
}

impl Dimensions {
    pub fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Flag {
    Height,
    Width,
}

impl Flag {
    pub const ALL: [Flag; 2] = [Flag::Height, Flag::Width];

    /// Exact, case-sensitive match against the long option names.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Height => "--height",
            Flag::Width => "--width",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
