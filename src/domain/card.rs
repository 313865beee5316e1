use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Цвет (масть) карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Humans,  // h
    Dwarves, // d
    Elves,   // e
    Giants,  // g
}

impl Color {
    /// Все цвета в фиксированном порядке колоды.
    pub const ALL: [Color; 4] = [Color::Humans, Color::Dwarves, Color::Elves, Color::Giants];
}

/// Минимальный и максимальный числовой ранг.
pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 13;

/// Ранг карты: число 1..=13 либо одна из двух спецкарт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    /// «Z» – всегда забирает взятку.
    Wizard,
    /// «N» – никогда не берёт взятку и не задаёт цвет.
    Jester,
}

/// Карта. Цвет есть только у числовых карт, поэтому инвариант
/// «цвет ⇔ числовой ранг» выражен самой формой enum.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Number { rank: u8, color: Color },
    Wizard,
    Jester,
}

impl Card {
    pub const fn number(rank: u8, color: Color) -> Self {
        Card::Number { rank, color }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Number { color, .. } => Some(*color),
            Card::Wizard | Card::Jester => None,
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            Card::Number { rank, .. } => Rank::Number(*rank),
            Card::Wizard => Rank::Wizard,
            Card::Jester => Rank::Jester,
        }
    }

    /// Числовое значение ранга (0 для спецкарт).
    pub fn numeric_rank(&self) -> u32 {
        match self {
            Card::Number { rank, .. } => *rank as u32,
            Card::Wizard | Card::Jester => 0,
        }
    }

    pub fn is_wizard(&self) -> bool {
        matches!(self, Card::Wizard)
    }

    pub fn is_jester(&self) -> bool {
        matches!(self, Card::Jester)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Color::Humans => 'h',
            Color::Dwarves => 'd',
            Color::Elves => 'e',
            Color::Giants => 'g',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Wizard => write!(f, "Z"),
            Rank::Jester => write!(f, "N"),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `10h`, `1e`, `Z`, `N`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number { rank, color } => write!(f, "{rank}{color}"),
            Card::Wizard => write!(f, "Z"),
            Card::Jester => write!(f, "N"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Принимает и короткую букву, и полное имя: `h` / `humans`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "humans" => Ok(Color::Humans),
            "d" | "dwarves" => Ok(Color::Dwarves),
            "e" | "elves" => Ok(Color::Elves),
            "g" | "giants" => Ok(Color::Giants),
            _ => Err(format!("Invalid color: {s}")),
        }
    }
}

/// Парсинг строки вида "10h", "1e", "Z", "N".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "Z" | "z" => return Ok(Card::Wizard),
            "N" | "n" => return Ok(Card::Jester),
            _ => {}
        }

        if s.len() < 2 || s.len() > 3 || !s.is_ascii() {
            return Err(format!("Invalid card: {s}"));
        }

        let (rank_part, color_part) = s.split_at(s.len() - 1);
        let rank: u8 = rank_part
            .parse()
            .map_err(|_| format!("Invalid rank: {rank_part}"))?;
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(format!("Rank out of range: {rank}"));
        }
        let color: Color = color_part.parse()?;

        Ok(Card::number(rank, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cards_have_no_color() {
        assert_eq!(Card::Wizard.color(), None);
        assert_eq!(Card::Jester.color(), None);
        assert_eq!(Card::number(7, Color::Elves).color(), Some(Color::Elves));
    }

    #[test]
    fn parse_rejects_out_of_range_ranks() {
        assert!("0h".parse::<Card>().is_err());
        assert!("14g".parse::<Card>().is_err());
        assert!("10x".parse::<Card>().is_err());
        assert_eq!("13g".parse::<Card>(), Ok(Card::number(13, Color::Giants)));
    }
}
