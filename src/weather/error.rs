use thiserror::Error;

use crate::models::City;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("city name is missing")]
    MissingCity,
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("no city has been requested yet")]
    NoActiveCity,
    #[error("no weather sample to convert")]
    NoActiveSample,
}

impl WeatherError {
    /// Подсказка пользователю, что делать дальше
    pub fn guidance(&self) -> String {
        let cities = City::ALL
            .iter()
            .map(|city| city.display_name())
            .collect::<Vec<_>>();

        match self {
            WeatherError::MissingCity => format!(
                "Чтобы узнать погоду, введите название города после команды /weather\n\
                Например: /weather Moscow\n\
                Доступные города: {}",
                cities.join(", ")
            ),
            WeatherError::UnknownCity(_) => format!(
                "К сожалению, я не могу показать погоду для этого города.\n\
                Доступные города:\n\
                {}\n\
                Попробуйте один из них!",
                cities
                    .iter()
                    .map(|name| format!("- {}", name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            WeatherError::NoActiveCity => {
                "Сначала запросите погоду для города с помощью /weather <город>".to_string()
            }
            WeatherError::NoActiveSample => "Сначала запросите погоду для города с помощью /weather <город>, \
                а затем я смогу конвертировать температуру!"
                .to_string(),
        }
    }
}
