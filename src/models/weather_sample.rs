use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{City, TemperatureUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Clear,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Clear => "ясно",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub city: City,
    pub temperature: i32,
    pub unit: TemperatureUnit,
    pub condition: Condition,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSample {
    /// Тот же замер в противоположной шкале. Новое значение не разыгрывается.
    pub fn converted(&self) -> WeatherSample {
        let (temperature, unit) = self.unit.convert(self.temperature);
        WeatherSample {
            temperature,
            unit,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub before: WeatherSample,
    pub after: WeatherSample,
}
