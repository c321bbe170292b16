use std::collections::HashMap;
use teloxide::types::UserId;

use crate::models::{TemperatureUnit, UserSession};

/// Выбранные пользователями шкалы. Живёт, пока живёт процесс.
///
/// Записи не удаляются: при ожидаемом числе пользователей рост не ограничиваем.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<UserId, UserSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создаёт запись с шкалой по умолчанию, если пользователя ещё нет
    pub fn ensure(&mut self, user_id: UserId) -> &UserSession {
        self.sessions
            .entry(user_id)
            .or_insert_with(|| {
                log::debug!("🆕 New session for user {}", user_id.0);
                UserSession::new(user_id)
            })
    }

    pub fn get_unit(&self, user_id: UserId) -> TemperatureUnit {
        self.sessions
            .get(&user_id)
            .map(|session| session.preferred_unit)
            .unwrap_or_default()
    }

    pub fn set_unit(&mut self, user_id: UserId, unit: TemperatureUnit) {
        self.sessions
            .entry(user_id)
            .or_insert_with(|| UserSession::new(user_id))
            .preferred_unit = unit;
    }

    pub fn get(&self, user_id: UserId) -> Option<&UserSession> {
        self.sessions.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}
