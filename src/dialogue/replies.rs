use crate::models::{City, Conversion, Reply, TemperatureUnit, WeatherSample};

pub const BUTTON_UPDATE: &str = "Обновить данные";
pub const UPDATING_NOTICE: &str = "Обновляю данные о погоде...";

fn cities_inline() -> String {
    City::ALL
        .iter()
        .map(|city| city.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn greeting(first_name: &str) -> Reply {
    Reply::text(format!(
        "Привет, {}!\n\
        Я - бот для отслеживания погоды и конвертации температур.\n\n\
        Пожалуйста, выберите предпочитаемую шкалу температуры:",
        first_name
    ))
    .with_keyboard(TemperatureUnit::ALL.map(TemperatureUnit::label), 2)
}

pub fn unit_chosen(unit: TemperatureUnit) -> Reply {
    Reply::text(format!(
        "Отлично! Вы выбрали {}.\n\n\
        Теперь вы можете:\n\
        - Узнать погоду: /weather <город>\n\
        - Посмотреть список команд: /help\n\n\
        Начните с запроса погоды для одного из доступных городов!",
        unit.label()
    ))
}

pub fn help() -> Reply {
    Reply::text(format!(
        "Доступные команды:\n\n\
        /start - Начать работу с ботом заново\n\
        /weather <город> - Узнать текущую погоду в выбранном городе\n\
        /convert - Конвертировать текущую температуру между шкалами\n\n\
        Доступные города: {}\n\n\
        Для начала просто запросите погоду в нужном городе!",
        cities_inline()
    ))
}

pub fn weather(sample: &WeatherSample) -> Reply {
    Reply::text(format!(
        "Погода в городе {}:\n\
        Температура: {} {}\n\
        Состояние: {}\n\
        Можете обновить данные кнопкой ниже или конвертировать температуру командой /convert",
        sample.city.display_name(),
        sample.temperature,
        sample.unit.label(),
        sample.condition.label()
    ))
    .with_keyboard([BUTTON_UPDATE], 1)
}

pub fn conversion(conversion: &Conversion) -> Reply {
    let direction = match conversion.before.unit {
        TemperatureUnit::Celsius => "Цельсий → Фаренгейт",
        TemperatureUnit::Fahrenheit => "Фаренгейт → Цельсий",
    };

    Reply::text(format!(
        "Результат конвертации ({}):\n\n\
        Температура в {}:\n\
        Было: {} {}\n\
        Стало: {} {}\n\n\
        Можете снова запросить погоду или обновить текущие данные!",
        direction,
        conversion.after.city.display_name(),
        conversion.before.temperature,
        conversion.before.unit.label(),
        conversion.after.temperature,
        conversion.after.unit.label()
    ))
}
