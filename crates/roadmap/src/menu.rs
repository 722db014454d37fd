//! Interactive main menu.

use std::fmt;
use std::str::FromStr;

use crate::error::RoadmapError;

/// Actions offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateRoadmap,
    DisplayRoadmap,
    SetupLabels,
}

impl MenuChoice {
    pub const ALL: [Self; 3] = [Self::CreateRoadmap, Self::DisplayRoadmap, Self::SetupLabels];

    /// Key the user types to pick this entry.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::CreateRoadmap => '1',
            Self::DisplayRoadmap => '2',
            Self::SetupLabels => '3',
        }
    }

    /// Menu text listing every choice.
    #[must_use]
    pub fn prompt() -> String {
        let mut out = String::from("What would you like to do?\n");
        for choice in Self::ALL {
            out.push_str(&format!("{}. {choice}\n", choice.key()));
        }
        out
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateRoadmap => "Create complete roadmap",
            Self::DisplayRoadmap => "Display current roadmap",
            Self::SetupLabels => "Setup labels only",
        })
    }
}

impl FromStr for MenuChoice {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL
                .into_iter()
                .find(|choice| choice.key() == c)
                .ok_or_else(|| RoadmapError::InvalidChoice(input.to_string())),
            _ => Err(RoadmapError::InvalidChoice(input.to_string())),
        }
    }
}
