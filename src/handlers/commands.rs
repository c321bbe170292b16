use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::handlers::utils::send_reply;
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let reply = match cmd {
        Command::Start => state.on_start(user.id, &user.first_name).await,
        Command::Help => state.on_help_request(),
        Command::Weather(city) => {
            let city = Some(city.trim()).filter(|city| !city.is_empty());
            state.on_weather_request(user.id, city).await
        }
        Command::Convert => state.on_convert_request(user.id).await,
    };

    send_reply(&bot, msg.chat.id, reply, None).await?;
    log::debug!("📦 State after command: {}", state.snapshot().await);

    Ok(())
}
