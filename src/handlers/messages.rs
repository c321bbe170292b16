use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::dialogue::replies::BUTTON_UPDATE;
use crate::handlers::utils::send_reply;
use crate::models::TemperatureUnit;

/// Нажатия кнопок приходят обычным текстом
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (Some(text), Some(user)) = (msg.text(), msg.from.as_ref()) else {
        return Ok(());
    };

    if let Some(unit) = TemperatureUnit::from_label(text) {
        if let Some(reply) = state.on_unit_chosen(user.id, unit).await {
            send_reply(&bot, msg.chat.id, reply, Some(msg.id)).await?;
        }
    } else if text == BUTTON_UPDATE {
        let reply = state.on_update_request(user.id).await;
        send_reply(&bot, msg.chat.id, reply, None).await?;
    }

    Ok(())
}
