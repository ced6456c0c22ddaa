//! Wallpaper catalogue

use serde::{Deserialize, Serialize};

/// Desktop background choices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wallpaper {
    #[default]
    Aurora,
    Dunes,
    Graphite,
    Meadow,
    Nightfall,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 5] = [
        Wallpaper::Aurora,
        Wallpaper::Dunes,
        Wallpaper::Graphite,
        Wallpaper::Meadow,
        Wallpaper::Nightfall,
    ];

    /// Stable name, matches the serde form
    pub fn name(self) -> &'static str {
        match self {
            Wallpaper::Aurora => "aurora",
            Wallpaper::Dunes => "dunes",
            Wallpaper::Graphite => "graphite",
            Wallpaper::Meadow => "meadow",
            Wallpaper::Nightfall => "nightfall",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }
}
