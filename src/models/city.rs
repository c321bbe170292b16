use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::weather::WeatherError;

/// Города, для которых бот умеет показывать погоду
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Moscow,
    Volgograd,
    Saratov,
}

impl City {
    pub const ALL: [City; 3] = [City::Moscow, City::Volgograd, City::Saratov];

    /// Нормализованное имя (нижний регистр)
    pub fn key(self) -> &'static str {
        match self {
            City::Moscow => "moscow",
            City::Volgograd => "volgograd",
            City::Saratov => "saratov",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Moscow => "Moscow",
            City::Volgograd => "Volgograd",
            City::Saratov => "Saratov",
        }
    }
}

impl FromStr for City {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|city| city.key() == normalized)
            .ok_or(WeatherError::UnknownCity(normalized))
    }
}
