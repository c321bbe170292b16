pub mod error;

pub use error::WeatherError;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::{City, Condition, TemperatureUnit, WeatherSample};

/// Источник случайной температуры. Тесты подставляют свой.
pub trait TemperatureSource: Send {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32;
}

pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TemperatureSource for RandomSource {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.gen_range(range)
    }
}

pub struct WeatherSampler {
    source: Box<dyn TemperatureSource>,
}

impl WeatherSampler {
    pub fn new(source: impl TemperatureSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Проверяет город и разыгрывает температуру в диапазоне шкалы `unit`.
    pub fn sample(
        &mut self,
        city_name: Option<&str>,
        unit: TemperatureUnit,
    ) -> Result<WeatherSample, WeatherError> {
        let city_name = city_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(WeatherError::MissingCity)?;
        let city: City = city_name.parse()?;
        Ok(self.sample_city(city, unit))
    }

    pub fn sample_city(&mut self, city: City, unit: TemperatureUnit) -> WeatherSample {
        let range = unit.sample_range();
        let drawn = self.source.draw(range.clone());
        // чужой источник не должен вывести значение за пределы диапазона
        let temperature = drawn.clamp(*range.start(), *range.end());

        log::debug!("🎲 Sampled {} {:?} for {}", temperature, unit, city.key());

        WeatherSample {
            city,
            temperature,
            unit,
            condition: Condition::Clear,
            fetched_at: Utc::now(),
        }
    }
}
