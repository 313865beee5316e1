//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - генерация ID матчей.

pub mod ids;
pub mod rng;

pub use ids::*;
pub use rng::*;
