use serde::{Deserialize, Serialize};

/// Последний принятый шаг диалога.
///
/// Выбор шкалы принимается только сразу после `/start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DialogueState {
    #[default]
    Fresh,
    Started,
    UnitChosen,
    WeatherFetched,
    Converted,
}

impl DialogueState {
    pub fn accepts_unit_choice(self) -> bool {
        self == DialogueState::Started
    }
}
