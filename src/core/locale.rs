//! Locale tags and their fixed string bundles.
//!
//! Only two locales exist. Each maps to a static [`Strings`] bundle; there
//! is no runtime loading.

use serde::{Deserialize, Serialize};

/// Supported locale tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan).
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English (United States).
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 tag, also used as the spoken-language hint.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::EnUs => "en-US",
        }
    }

    /// The other supported locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Locale::ZhTw => Locale::EnUs,
            Locale::EnUs => Locale::ZhTw,
        }
    }

    /// String bundle for this locale.
    #[must_use]
    pub const fn strings(self) -> &'static Strings {
        match self {
            Locale::ZhTw => &ZH_TW,
            Locale::EnUs => &EN_US,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Named UI and announcement strings for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Strings {
    pub round: &'static str,
    pub score: &'static str,
    pub correct: &'static str,
    pub try_again: &'static str,
    /// Template with a single `{score}` placeholder.
    pub game_over: &'static str,
    pub restart: &'static str,
    pub exit_confirm: &'static str,
    pub exit: &'static str,
}

impl Strings {
    /// `game_over` with the score filled in.
    #[must_use]
    pub fn game_over_message(&self, score: u32) -> String {
        self.game_over.replace("{score}", &score.to_string())
    }
}

const ZH_TW: Strings = Strings {
    round: "回合",
    score: "得分",
    correct: "答對了！",
    try_again: "再試一次！",
    game_over: "遊戲結束！你得到了 {score} 分！",
    restart: "再玩一次",
    exit_confirm: "確定要退出遊戲嗎？",
    exit: "退出",
};

const EN_US: Strings = Strings {
    round: "Round",
    score: "Score",
    correct: "Correct!",
    try_again: "Try again!",
    game_over: "Game Over! You got {score} points.",
    restart: "Play Again",
    exit_confirm: "Are you sure you want to exit?",
    exit: "Exit",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for locale in [Locale::ZhTw, Locale::EnUs] {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn test_default_is_zh_tw() {
        assert_eq!(Locale::default(), Locale::ZhTw);
    }

    #[test]
    fn test_bundles_differ() {
        assert_eq!(Locale::EnUs.strings().correct, "Correct!");
        assert_eq!(Locale::ZhTw.strings().correct, "答對了！");
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(
            Locale::EnUs.strings().game_over_message(7),
            "Game Over! You got 7 points."
        );
        assert_eq!(
            Locale::ZhTw.strings().game_over_message(10),
            "遊戲結束！你得到了 10 分！"
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Locale::EnUs).unwrap();
        assert_eq!(json, "\"en-US\"");

        let parsed: Locale = serde_json::from_str("\"zh-TW\"").unwrap();
        assert_eq!(parsed, Locale::ZhTw);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Locale::EnUs), "en-US");
    }
}
