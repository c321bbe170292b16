use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, MessageId, ReplyMarkup, ReplyParameters};

use crate::models::{Reply, ReplyKeyboard};

/// Клавиатура быстрых ответов
pub fn reply_keyboard(keyboard: &ReplyKeyboard) -> ReplyMarkup {
    let rows = keyboard
        .rows()
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    ReplyMarkup::Keyboard(
        KeyboardMarkup::new(rows)
            .resize_keyboard()
            .one_time_keyboard()
    )
}

/// Отправка ответа ядра как есть. `reply_to` цитирует сообщение пользователя.
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
    reply_to: Option<MessageId>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(notice) = reply.notice {
        bot.send_message(chat_id, notice).await?;
    }

    let mut request = bot.send_message(chat_id, reply.text);
    if let Some(message_id) = reply_to {
        request = request.reply_parameters(ReplyParameters::new(message_id));
    }
    if let Some(keyboard) = reply.keyboard {
        request = request.reply_markup(reply_keyboard(&keyboard));
    }
    request.await?;

    Ok(())
}
