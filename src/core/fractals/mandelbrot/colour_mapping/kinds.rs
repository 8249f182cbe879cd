use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourMapKind {
    #[default]
    Rainbow,
    Greyscale,
    BeetleJuice,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::Greyscale, Self::BeetleJuice];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Banded rainbow",
            Self::Greyscale => "Greyscale",
            Self::BeetleJuice => "Beetle juice",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
