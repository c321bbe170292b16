pub mod city;
pub mod dialogue_state;
pub mod reply;
pub mod session;
pub mod unit;
pub mod weather_sample;

pub use city::City;
pub use dialogue_state::DialogueState;
pub use reply::{Reply, ReplyKeyboard};
pub use session::UserSession;
pub use unit::TemperatureUnit;
pub use weather_sample::{Condition, Conversion, WeatherSample};
