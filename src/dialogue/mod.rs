//! Порядок команд диалога и текущий замер погоды.
//!
//! Текущий замер, текущий город и эффективная шкала общие для всего процесса,
//! а не для отдельного пользователя: запрос одного пользователя перезаписывает
//! замер, который видит другой.

pub mod replies;

use teloxide::types::UserId;

use crate::database::SessionStore;
use crate::models::{City, Conversion, DialogueState, TemperatureUnit, WeatherSample};
use crate::weather::{WeatherError, WeatherSampler};

pub struct DialogueMachine {
    sessions: SessionStore,
    sampler: WeatherSampler,
    state: DialogueState,
    current: Option<WeatherSample>,
    current_city: Option<City>,
    effective_unit: Option<TemperatureUnit>,
}

impl DialogueMachine {
    pub fn new(sampler: WeatherSampler) -> Self {
        Self {
            sessions: SessionStore::new(),
            sampler,
            state: DialogueState::Fresh,
            current: None,
            current_city: None,
            effective_unit: None,
        }
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn current_sample(&self) -> Option<&WeatherSample> {
        self.current.as_ref()
    }

    pub fn current_city(&self) -> Option<City> {
        self.current_city
    }

    /// Всегда допустим, из любого состояния
    pub fn start(&mut self, user_id: UserId) {
        self.sessions.ensure(user_id);
        self.state = DialogueState::Started;
        log::info!("👋 Session started for user {}", user_id.0);
    }

    /// Принимается только сразу после `start`. Иначе ничего не меняет и
    /// возвращает `false`.
    pub fn choose_unit(&mut self, user_id: UserId, unit: TemperatureUnit) -> bool {
        if !self.state.accepts_unit_choice() {
            log::debug!(
                "🙈 Ignoring unit choice {:?} from user {} in state {:?}",
                unit,
                user_id.0,
                self.state
            );
            return false;
        }

        self.sessions.set_unit(user_id, unit);
        self.effective_unit = Some(unit);
        self.state = DialogueState::UnitChosen;
        log::info!("🌡️ User {} chose {:?}", user_id.0, unit);
        true
    }

    pub fn request_weather(
        &mut self,
        user_id: UserId,
        city_name: Option<&str>,
    ) -> Result<WeatherSample, WeatherError> {
        let unit = self.unit_for(user_id);
        let sample = self.sampler.sample(city_name, unit).map_err(|e| {
            log::warn!("⚠️ Weather request from user {} rejected: {}", user_id.0, e);
            e
        })?;
        Ok(self.remember(user_id, sample))
    }

    /// Новый замер для текущего города
    pub fn update(&mut self, user_id: UserId) -> Result<WeatherSample, WeatherError> {
        let Some(city) = self.current_city else {
            log::warn!("⚠️ Update from user {} without active city", user_id.0);
            return Err(WeatherError::NoActiveCity);
        };
        let unit = self.unit_for(user_id);
        let sample = self.sampler.sample_city(city, unit);
        Ok(self.remember(user_id, sample))
    }

    pub fn convert(&mut self, user_id: UserId) -> Result<Conversion, WeatherError> {
        let Some(before) = self.current.clone() else {
            log::warn!("⚠️ Convert from user {} without active sample", user_id.0);
            return Err(WeatherError::NoActiveSample);
        };

        let after = before.converted();
        self.effective_unit = Some(after.unit);
        self.current = Some(after.clone());
        self.state = DialogueState::Converted;

        log::info!(
            "🔁 User {} converted {} {:?} -> {} {:?} in {}",
            user_id.0,
            before.temperature,
            before.unit,
            after.temperature,
            after.unit,
            after.city.key()
        );

        Ok(Conversion { before, after })
    }

    fn unit_for(&self, user_id: UserId) -> TemperatureUnit {
        self.effective_unit
            .unwrap_or_else(|| self.sessions.get_unit(user_id))
    }

    fn remember(&mut self, user_id: UserId, sample: WeatherSample) -> WeatherSample {
        self.current_city = Some(sample.city);
        self.current = Some(sample.clone());
        self.state = DialogueState::WeatherFetched;
        log::info!(
            "☀️ Weather for user {}: {} {} {:?}",
            user_id.0,
            sample.city.key(),
            sample.temperature,
            sample.unit
        );
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::testing::ScriptedSource;
    use crate::weather::RandomSource;

    const U1: UserId = UserId(1);
    const U2: UserId = UserId(2);

    fn machine(values: impl IntoIterator<Item = i32>) -> DialogueMachine {
        DialogueMachine::new(WeatherSampler::new(ScriptedSource::new(values)))
    }

    #[test]
    fn start_creates_session_and_is_reentrant() {
        let mut m = machine([]);
        assert_eq!(m.state(), DialogueState::Fresh);

        m.start(U1);
        assert_eq!(m.state(), DialogueState::Started);
        assert_eq!(m.sessions().get(U1).unwrap().preferred_unit, TemperatureUnit::Celsius);

        m.request_weather(U1, Some("moscow")).unwrap();
        m.start(U1);
        assert_eq!(m.state(), DialogueState::Started);
        assert_eq!(m.sessions().len(), 1);
    }

    #[test]
    fn unit_choice_right_after_start_is_stored() {
        let mut m = machine([]);
        m.start(U1);
        assert!(m.choose_unit(U1, TemperatureUnit::Fahrenheit));
        assert_eq!(m.state(), DialogueState::UnitChosen);
        assert_eq!(m.sessions().get_unit(U1), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn unit_choice_without_start_is_ignored() {
        let mut m = machine([]);
        assert!(!m.choose_unit(U1, TemperatureUnit::Fahrenheit));
        assert_eq!(m.state(), DialogueState::Fresh);
        assert_eq!(m.sessions().get_unit(U1), TemperatureUnit::Celsius);
        assert!(m.sessions().get(U1).is_none());
    }

    #[test]
    fn second_unit_choice_is_ignored() {
        let mut m = machine([]);
        m.start(U1);
        assert!(m.choose_unit(U1, TemperatureUnit::Fahrenheit));
        assert!(!m.choose_unit(U1, TemperatureUnit::Celsius));
        assert_eq!(m.state(), DialogueState::UnitChosen);
        assert_eq!(m.sessions().get_unit(U1), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn unit_choice_after_weather_is_ignored() {
        let mut m = machine([5]);
        m.start(U1);
        m.request_weather(U1, Some("saratov")).unwrap();
        assert!(!m.choose_unit(U1, TemperatureUnit::Fahrenheit));
        assert_eq!(m.state(), DialogueState::WeatherFetched);
        assert_eq!(m.sessions().get_unit(U1), TemperatureUnit::Celsius);
    }

    #[test]
    fn convert_and_update_need_a_prior_weather_request() {
        let mut m = machine([]);
        m.start(U1);
        assert_eq!(m.convert(U1), Err(WeatherError::NoActiveSample));
        assert_eq!(m.update(U1), Err(WeatherError::NoActiveCity));
        assert_eq!(m.state(), DialogueState::Started);
    }

    #[test]
    fn failed_weather_requests_leave_state_untouched() {
        let mut m = machine([]);
        m.start(U1);
        assert_eq!(m.request_weather(U1, None), Err(WeatherError::MissingCity));
        assert_eq!(
            m.request_weather(U1, Some("Berlin")),
            Err(WeatherError::UnknownCity("berlin".to_string()))
        );
        assert_eq!(m.state(), DialogueState::Started);
        assert!(m.current_sample().is_none());
        assert!(m.current_city().is_none());
        // выбор шкалы всё ещё допустим
        assert!(m.choose_unit(U1, TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn fahrenheit_weather_then_convert() {
        let mut m = DialogueMachine::new(WeatherSampler::new(RandomSource::seeded(42)));
        m.start(U1);
        m.choose_unit(U1, TemperatureUnit::Fahrenheit);

        let sample = m.request_weather(U1, Some("Moscow")).unwrap();
        assert!((14..=86).contains(&sample.temperature));
        assert_eq!(sample.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(sample.city.key(), "moscow");

        let conversion = m.convert(U1).unwrap();
        assert_eq!(conversion.before, sample);
        assert_eq!(conversion.after.unit, TemperatureUnit::Celsius);
        assert_eq!(conversion.after.temperature, (sample.temperature - 32) * 5 / 9);
        assert_eq!(m.state(), DialogueState::Converted);
        assert_eq!(m.current_sample(), Some(&conversion.after));
    }

    #[test]
    fn convert_flips_unit_for_following_samples() {
        let mut m = machine([20, 70]);
        m.start(U1);
        m.request_weather(U1, Some("volgograd")).unwrap();

        let conversion = m.convert(U1).unwrap();
        assert_eq!(conversion.after.temperature, 68);
        assert_eq!(conversion.after.unit, TemperatureUnit::Fahrenheit);

        let updated = m.update(U1).unwrap();
        assert_eq!(updated.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(updated.temperature, 70);
        assert_eq!(updated.city, City::Volgograd);
    }

    #[test]
    fn converting_twice_goes_back_and_forth() {
        let mut m = machine([1]);
        m.start(U1);
        m.request_weather(U1, Some("moscow")).unwrap();
        let first = m.convert(U1).unwrap();
        assert_eq!((first.after.temperature, first.after.unit), (33, TemperatureUnit::Fahrenheit));
        let second = m.convert(U1).unwrap();
        assert_eq!((second.after.temperature, second.after.unit), (0, TemperatureUnit::Celsius));
    }

    #[test]
    fn zero_degrees_can_be_converted() {
        let mut m = machine([0]);
        m.start(U1);
        m.request_weather(U1, Some("moscow")).unwrap();
        let conversion = m.convert(U1).unwrap();
        assert_eq!(conversion.after.temperature, 32);
    }

    #[test]
    fn update_resamples_same_city_and_unit() {
        let mut m = machine([-3, 25]);
        m.start(U1);
        let first = m.request_weather(U1, Some("Saratov")).unwrap();
        let second = m.update(U1).unwrap();
        assert_eq!(first.temperature, -3);
        assert_eq!(second.temperature, 25);
        assert_eq!(second.city, first.city);
        assert_eq!(second.unit, first.unit);
        assert_eq!(m.state(), DialogueState::WeatherFetched);
    }

    #[test]
    fn current_sample_is_shared_between_users() {
        // Известное ограничение: один замер на процесс.
        // При параллельной обработке его нужно хранить по пользователю.
        let mut m = machine([10, 15]);
        m.start(U1);
        m.request_weather(U1, Some("moscow")).unwrap();
        m.request_weather(U2, Some("saratov")).unwrap();

        let conversion = m.convert(U1).unwrap();
        assert_eq!(conversion.before.city, City::Saratov);
        assert_eq!(conversion.before.temperature, 15);

        // U2 не вызывал /start, но update берёт последний город процесса
        assert_eq!(m.update(U2).unwrap().city, City::Saratov);
    }

    #[test]
    fn another_users_start_opens_the_unit_gate() {
        let mut m = machine([]);
        m.start(U1);
        m.start(U2);
        // гейт глобальный: последний шаг был start, значит U1 может выбрать
        assert!(m.choose_unit(U1, TemperatureUnit::Fahrenheit));
        assert_eq!(m.sessions().get_unit(U1), TemperatureUnit::Fahrenheit);
        assert_eq!(m.sessions().get_unit(U2), TemperatureUnit::Celsius);
    }
}
