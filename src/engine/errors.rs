use thiserror::Error;

use crate::domain::PlayerId;

/// Ошибки движка. Все синхронные и восстанавливаемые:
/// упавший вызов не меняет состояние матча.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Раунд не найден")]
    RoundNotFound,

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Сейчас не ход игрока {0}")]
    NotYourTurn(PlayerId),

    #[error("Это действие сейчас не ожидается")]
    WrongPhase,

    #[error("Заявка {bid} вне диапазона 0..={max}")]
    InvalidForecast { bid: i32, max: u8 },

    #[error("Игрок уже сделал заявку в этом раунде")]
    ForecastAlreadySet,

    #[error("Последняя заявка не может сделать сумму заявок равной {round_number}")]
    IllegalForecast { round_number: u8 },

    #[error("Нужно ходить в цвет взятки")]
    MustFollowSuit,

    #[error("Такой карты нет в руке")]
    CardNotInHand,

    #[error("Колода пуста")]
    EmptyDeck,

    #[error("Недостаточно игроков для матча")]
    NotEnoughPlayers,

    #[error("Слишком много игроков для матча")]
    TooManyPlayers,

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Матч уже завершён")]
    MatchFinished,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
