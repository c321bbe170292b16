use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod config;
mod database;
mod dialogue;
mod handlers;
mod models;
mod weather;

use crate::bot_state::BotState;
use crate::config::BotConfig;
use crate::handlers::{command_handler, message_handler};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом заново")]
    Start,
    #[command(description = "показать помощь")]
    Help,
    #[command(description = "узнать погоду: /weather <город>")]
    Weather(String),
    #[command(description = "конвертировать текущую температуру")]
    Convert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting weather bot...");

    let config = BotConfig::from_env()?;
    let state = BotState::new(config.sampler());

    let bot = Bot::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler)
        )
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "❌ Error while handling update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
