//! Menu choices and how typed answers map onto them.
//!
//! Every menu accepts its 1-based number; most also accept the option name.

use game_content::ShopItem;
use game_core::ActionChoice;
use runtime::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    NewGame,
    LoadGame,
    Exit,
}

impl MainChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "new" => Some(Self::NewGame),
            "2" | "load" => Some(Self::LoadGame),
            "3" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What to do after a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelChoice {
    Continue,
    Save,
    Shop,
    Exit,
}

impl LevelChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "continue" => Some(Self::Continue),
            "2" | "save" => Some(Self::Save),
            "3" | "shop" => Some(Self::Shop),
            "4" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopChoice {
    Buy(ShopItem),
    Leave,
}

impl ShopChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        let leave = ShopItem::COUNT + 1;
        match answer.parse::<usize>() {
            Ok(n) if n == leave => Some(Self::Leave),
            Ok(n) => n
                .checked_sub(1)
                .and_then(|index| ShopItem::all().get(index).copied())
                .map(Self::Buy),
            Err(_) if answer.eq_ignore_ascii_case("leave") => Some(Self::Leave),
            Err(_) => ShopItem::parse(answer).ok().map(Self::Buy),
        }
    }
}

/// Accepts `1`/`2` or the difficulty name.
pub fn parse_difficulty(answer: &str) -> Option<Difficulty> {
    match answer.trim() {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Hard),
        other => other.parse().ok(),
    }
}

pub fn parse_action(answer: &str) -> ActionChoice {
    match answer.trim().to_ascii_lowercase().as_str() {
        "1" | "attack" | "a" => ActionChoice::Attack,
        "2" | "potion" | "p" => ActionChoice::UsePotion,
        "3" | "skip" | "s" => ActionChoice::Skip,
        "4" | "flee" | "run" => ActionChoice::Abort,
        _ => ActionChoice::Invalid,
    }
}

/// Converts a 1-based answer to a 0-based position.
///
/// `None` for anything that is not a positive number; range checks are left
/// to the caller.
pub fn parse_position(answer: &str) -> Option<usize> {
    answer.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// `y`/`yes` (any case) is yes; anything else is no.
pub fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_names_select_the_same_option() {
        assert_eq!(MainChoice::parse("2"), Some(MainChoice::LoadGame));
        assert_eq!(MainChoice::parse(" Load "), Some(MainChoice::LoadGame));
        assert_eq!(MainChoice::parse("4"), None);

        assert_eq!(LevelChoice::parse("3"), Some(LevelChoice::Shop));
        assert_eq!(LevelChoice::parse("quit"), Some(LevelChoice::Exit));
    }

    #[test]
    fn shop_answers() {
        assert_eq!(ShopChoice::parse("1"), Some(ShopChoice::Buy(ShopItem::Hamburger)));
        assert_eq!(ShopChoice::parse("coke"), Some(ShopChoice::Buy(ShopItem::Coke)));
        assert_eq!(ShopChoice::parse("3"), Some(ShopChoice::Leave));
        assert_eq!(ShopChoice::parse("0"), None);
        assert_eq!(ShopChoice::parse("pizza"), None);
    }

    #[test]
    fn battle_answers() {
        assert_eq!(parse_action("1"), ActionChoice::Attack);
        assert_eq!(parse_action("P"), ActionChoice::UsePotion);
        assert_eq!(parse_action("4"), ActionChoice::Abort);
        assert_eq!(parse_action("dance"), ActionChoice::Invalid);
        assert_eq!(parse_action(""), ActionChoice::Invalid);

        assert_eq!(parse_position("2"), Some(1));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("two"), None);
    }

    #[test]
    fn difficulty_answers() {
        assert_eq!(parse_difficulty("2"), Some(Difficulty::Hard));
        assert_eq!(parse_difficulty("easy"), Some(Difficulty::Easy));
        assert_eq!(parse_difficulty("9"), None);
    }
}
