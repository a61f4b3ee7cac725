//! Interface translations.
//!
//! A fixed two-language dictionary for everything nebula itself prints
//! (as opposed to the review text, whose language the model controls).
//! The active language is passed explicitly wherever text is produced;
//! there is no ambient current-language state. Parameterized messages are
//! plain functions so the compiler checks their arguments.

/// Language of nebula's own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLanguage {
    #[default]
    En,
    Ru,
}

impl UiLanguage {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(UiLanguage::En),
            "ru" => Some(UiLanguage::Ru),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UiLanguage::En => "en",
            UiLanguage::Ru => "ru",
        }
    }
}

/// Keys for the fixed (non-parameterized) interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Analyzing,
    MightTake,
    FeedbackTitle,
    OverallSummary,
    FinalThoughts,
    Error,
}

/// Look up a fixed interface string. Exhaustive on both axes, so adding
/// a key or a language without every translation is a compile error.
pub fn text(lang: UiLanguage, key: Text) -> &'static str {
    match lang {
        UiLanguage::En => match key {
            Text::Analyzing => "Analyzing your code with Gemini...",
            Text::MightTake => "This might take a few moments.",
            Text::FeedbackTitle => "Code Review Feedback",
            Text::OverallSummary => "Overall Summary",
            Text::FinalThoughts => "Final Thoughts",
            Text::Error => "Error",
        },
        UiLanguage::Ru => match key {
            Text::Analyzing => "Анализируем ваш код с помощью Gemini...",
            Text::MightTake => "Это может занять некоторое время.",
            Text::FeedbackTitle => "Результаты проверки кода",
            Text::OverallSummary => "Общий итог",
            Text::FinalThoughts => "Заключение",
            Text::Error => "Ошибка",
        },
    }
}

/// "Detected language: X" line in the review footer.
pub fn detected_language(lang: UiLanguage, label: &str) -> String {
    match lang {
        UiLanguage::En => format!("Detected language: {}", label),
        UiLanguage::Ru => format!("Обнаруженный язык: {}", label),
    }
}
