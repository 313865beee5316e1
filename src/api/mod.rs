//! Внешний API движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет состояние (козырь, заявка, ход картой);
//! - запросы (queries.rs) – только чтение, снапшот для конкретного игрока;
//! - DTO (dto.rs) – удобные структуры для клиента;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
