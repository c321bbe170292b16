use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const CELSIUS_LABEL: &str = "℃ (Цельсий)";
pub const FAHRENHEIT_LABEL: &str = "℉ (Фаренгейт)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    /// Текст кнопки, которым пользователь выбирает шкалу
    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => CELSIUS_LABEL,
            TemperatureUnit::Fahrenheit => FAHRENHEIT_LABEL,
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.label() == text)
    }

    pub fn opposite(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    /// Реалистичный диапазон показаний для шкалы (включительно)
    pub fn sample_range(self) -> RangeInclusive<i32> {
        match self {
            TemperatureUnit::Celsius => -10..=30,
            TemperatureUnit::Fahrenheit => 14..=86,
        }
    }

    /// Переводит температуру из `self` в противоположную шкалу.
    ///
    /// Дробная часть отбрасывается (усечение к нулю), поэтому
    /// C -> F -> C может отличаться от исходного значения на 1.
    /// Значения за пределами `i32` насыщаются.
    pub fn convert(self, temperature: i32) -> (i32, TemperatureUnit) {
        let t = i64::from(temperature);
        let converted = match self {
            // t * 9/5 + 32 == (9t + 160) / 5, одно деление -> одно усечение
            TemperatureUnit::Celsius => (t * 9 + 160) / 5,
            TemperatureUnit::Fahrenheit => (t - 32) * 5 / 9,
        };
        let converted = converted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        (converted, self.opposite())
    }
}
