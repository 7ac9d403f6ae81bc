//! Localized feedback text for the strength label, hints and breach result.

use crate::breach::BreachStatus;
use crate::types::{Criterion, StrengthLevel};

const LABELS_EN: [&str; 5] = ["Very weak", "Weak", "Fair", "Strong", "Very strong"];
const LABELS_JP: [&str; 5] = ["とても弱い", "弱い", "普通", "強い", "とても強い"];

/// Display language for feedback text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    /// Parses a short language code. Accepts `en`, `jp` and `ja`, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "jp" | "ja" => Some(Language::Japanese),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Japanese => "JP",
        }
    }
}

/// Label shown next to the strength bar.
pub fn strength_label(level: StrengthLevel, language: Language) -> &'static str {
    match language {
        Language::English => LABELS_EN[level.index()],
        Language::Japanese => LABELS_JP[level.index()],
    }
}

/// Short hint telling the user how to satisfy a criterion.
pub fn criterion_hint(criterion: Criterion, language: Language) -> &'static str {
    match (language, criterion) {
        (Language::English, Criterion::MinLength) => "Use at least 8 characters",
        (Language::English, Criterion::Lowercase) => "Add a lowercase letter",
        (Language::English, Criterion::Uppercase) => "Add an uppercase letter",
        (Language::English, Criterion::Digit) => "Add a number",
        (Language::English, Criterion::Symbol) => "Add a symbol",
        (Language::Japanese, Criterion::MinLength) => "8文字以上にしてください",
        (Language::Japanese, Criterion::Lowercase) => "小文字を追加してください",
        (Language::Japanese, Criterion::Uppercase) => "大文字を追加してください",
        (Language::Japanese, Criterion::Digit) => "数字を追加してください",
        (Language::Japanese, Criterion::Symbol) => "記号を追加してください",
    }
}

/// Message describing a breach lookup result.
pub fn breach_message(status: &BreachStatus, language: Language) -> String {
    match (language, status) {
        (Language::English, BreachStatus::Found(count)) => {
            format!("⚠️ This password has appeared in {count} breaches!")
        }
        (Language::English, BreachStatus::NotFound) => {
            "✅ This password has not appeared in known breaches.".to_string()
        }
        (Language::English, BreachStatus::Unknown) => {
            "❔ Could not check this password against known breaches.".to_string()
        }
        (Language::Japanese, BreachStatus::Found(count)) => {
            format!("⚠️ このパスワードは {count} 件の漏洩で見つかりました。")
        }
        (Language::Japanese, BreachStatus::NotFound) => {
            "✅ このパスワードは既知の漏洩には見つかりませんでした。".to_string()
        }
        (Language::Japanese, BreachStatus::Unknown) => {
            "❔ このパスワードの漏洩状況を確認できませんでした。".to_string()
        }
    }
}
