use serde::{Deserialize, Serialize};
use teloxide::types::UserId;

use super::TemperatureUnit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: UserId,
    pub preferred_unit: TemperatureUnit,
}

impl UserSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            preferred_unit: TemperatureUnit::default(),
        }
    }
}
