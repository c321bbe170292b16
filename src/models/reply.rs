/// Ответ ядра: текст и, возможно, клавиатура с быстрыми ответами.
/// Транспорт отображает его как есть.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Промежуточное сообщение, отправляется перед основным
    pub notice: Option<String>,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub buttons: Vec<String>,
    pub columns: usize,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            notice: None,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn with_keyboard<I, S>(mut self, buttons: I, columns: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard = Some(ReplyKeyboard {
            buttons: buttons.into_iter().map(Into::into).collect(),
            columns: columns.max(1),
        });
        self
    }
}

impl ReplyKeyboard {
    /// Раскладка кнопок по строкам
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.buttons
            .chunks(self.columns.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}
