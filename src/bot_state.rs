use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::Mutex;

use crate::dialogue::{replies, DialogueMachine};
use crate::models::{Reply, TemperatureUnit};
use crate::weather::WeatherSampler;

/// Общее состояние бота для обработчиков.
///
/// Диспетчер обрабатывает апдейты параллельно, поэтому машина под мьютексом:
/// каждое событие выполняется целиком, прежде чем начнётся следующее.
#[derive(Clone)]
pub struct BotState {
    machine: Arc<Mutex<DialogueMachine>>,
}

impl BotState {
    pub fn new(sampler: WeatherSampler) -> Self {
        Self {
            machine: Arc::new(Mutex::new(DialogueMachine::new(sampler))),
        }
    }

    pub async fn on_start(&self, user_id: UserId, first_name: &str) -> Reply {
        self.machine.lock().await.start(user_id);
        replies::greeting(first_name)
    }

    /// `None`, если выбор шкалы пришёл не сразу после `/start`
    pub async fn on_unit_chosen(&self, user_id: UserId, unit: TemperatureUnit) -> Option<Reply> {
        let accepted = self.machine.lock().await.choose_unit(user_id, unit);
        accepted.then(|| replies::unit_chosen(unit))
    }

    pub async fn on_weather_request(&self, user_id: UserId, city: Option<&str>) -> Reply {
        match self.machine.lock().await.request_weather(user_id, city) {
            Ok(sample) => replies::weather(&sample),
            Err(e) => Reply::text(e.guidance()),
        }
    }

    pub async fn on_update_request(&self, user_id: UserId) -> Reply {
        match self.machine.lock().await.update(user_id) {
            Ok(sample) => replies::weather(&sample).with_notice(replies::UPDATING_NOTICE),
            Err(e) => Reply::text(e.guidance()),
        }
    }

    pub async fn on_convert_request(&self, user_id: UserId) -> Reply {
        match self.machine.lock().await.convert(user_id) {
            Ok(conversion) => replies::conversion(&conversion),
            Err(e) => Reply::text(e.guidance()),
        }
    }

    pub fn on_help_request(&self) -> Reply {
        replies::help()
    }

    /// Снимок текущего замера для отладочного лога
    pub async fn snapshot(&self) -> serde_json::Value {
        let machine = self.machine.lock().await;
        serde_json::json!({
            "state": machine.state(),
            "current": machine.current_sample(),
            "sessions": machine.sessions().len(),
        })
    }
}
