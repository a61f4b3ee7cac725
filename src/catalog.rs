//! Static catalogs of supported programming and feedback languages.
//!
//! Both tables are fixed at compile time. Lookups never fail: an unknown
//! code falls back to a default label so prompt construction can proceed.

/// A programming language the reviewer knows how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    /// Short code used in prompts and as the fence tag (e.g. "python")
    pub code: &'static str,
    /// Human-readable name shown in the UI and the prompt
    pub label: &'static str,
}

/// A natural language the review feedback can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewLanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[LanguageOption] = &[
    LanguageOption { code: "javascript", label: "JavaScript" },
    LanguageOption { code: "python", label: "Python" },
    LanguageOption { code: "typescript", label: "TypeScript" },
    LanguageOption { code: "java", label: "Java" },
    LanguageOption { code: "csharp", label: "C#" },
    LanguageOption { code: "cpp", label: "C++" },
    LanguageOption { code: "go", label: "Go" },
    LanguageOption { code: "ruby", label: "Ruby" },
    LanguageOption { code: "php", label: "PHP" },
    LanguageOption { code: "swift", label: "Swift" },
    LanguageOption { code: "kotlin", label: "Kotlin" },
    LanguageOption { code: "rust", label: "Rust" },
    LanguageOption { code: "sql", label: "SQL" },
    LanguageOption { code: "shell", label: "Shell/Bash" },
    LanguageOption { code: "html", label: "HTML" },
    LanguageOption { code: "css", label: "CSS" },
    LanguageOption { code: "other", label: "Other/Plain Text" },
];

pub const SUPPORTED_REVIEW_LANGUAGES: &[ReviewLanguageOption] = &[
    ReviewLanguageOption { code: "en", label: "English" },
    ReviewLanguageOption { code: "ru", label: "Русский (Russian)" },
    ReviewLanguageOption { code: "es", label: "Español (Spanish)" },
    ReviewLanguageOption { code: "de", label: "Deutsch (German)" },
    ReviewLanguageOption { code: "fr", label: "Français (French)" },
    ReviewLanguageOption { code: "zh", label: "中文 (Chinese)" },
];

/// Default feedback language code when none is given.
pub const DEFAULT_REVIEW_LANGUAGE: &str = "en";

/// Label used for an unrecognized programming-language code.
const FALLBACK_LANGUAGE_LABEL: &str = "code";

/// Resolve a programming-language code to its display label.
pub fn language_label(code: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.label)
        .unwrap_or(FALLBACK_LANGUAGE_LABEL)
}

/// Resolve a feedback-language code to its display label.
///
/// Unknown codes fall back to the English label so the prompt always
/// names a real language.
pub fn review_language_label(code: &str) -> &'static str {
    SUPPORTED_REVIEW_LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.label)
        .unwrap_or("English")
}

/// Guess the catalog code for a file from its extension. Used when the
/// user does not pass `--language`; anything unrecognized reviews as
/// generic code.
pub fn language_for_path(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("js" | "mjs" | "cjs" | "jsx") => "javascript",
        Some("ts" | "tsx") => "typescript",
        Some("py") => "python",
        Some("java") => "java",
        Some("cs") => "csharp",
        Some("cpp" | "cc" | "cxx" | "hpp" | "hh") => "cpp",
        Some("go") => "go",
        Some("rb") => "ruby",
        Some("php") => "php",
        Some("swift") => "swift",
        Some("kt" | "kts") => "kotlin",
        Some("rs") => "rust",
        Some("sql") => "sql",
        Some("sh" | "bash" | "zsh") => "shell",
        Some("html" | "htm") => "html",
        Some("css") => "css",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_every_catalog_code_resolves_to_its_label() {
        for lang in SUPPORTED_LANGUAGES {
            assert_eq!(language_label(lang.code), lang.label);
        }
        for lang in SUPPORTED_REVIEW_LANGUAGES {
            assert_eq!(review_language_label(lang.code), lang.label);
        }
    }

    #[test]
    fn test_unknown_programming_language_falls_back() {
        assert_eq!(language_label("brainfuck"), "code");
        assert_eq!(language_label(""), "code");
    }

    #[test]
    fn test_unknown_review_language_falls_back_to_english() {
        assert_eq!(review_language_label("tlh"), "English");
        assert_eq!(review_language_label(""), "English");
    }

    #[test]
    fn test_language_for_path_maps_common_extensions() {
        assert_eq!(language_for_path(Path::new("main.rs")), "rust");
        assert_eq!(language_for_path(Path::new("app/Index.TSX")), "typescript");
        assert_eq!(language_for_path(Path::new("query.sql")), "sql");
    }

    #[test]
    fn test_language_for_path_falls_back_to_other() {
        assert_eq!(language_for_path(Path::new("Makefile")), "other");
        assert_eq!(language_for_path(Path::new("notes.txt")), "other");
    }

    #[test]
    fn test_detected_codes_exist_in_catalog() {
        for path in ["a.js", "a.ts", "a.py", "a.cs", "a.cpp", "a.sh", "a.htm"] {
            let code = language_for_path(Path::new(path));
            assert!(SUPPORTED_LANGUAGES.iter().any(|lang| lang.code == code));
        }
    }

    #[test]
    fn test_default_review_language_is_in_catalog() {
        assert!(SUPPORTED_REVIEW_LANGUAGES
            .iter()
            .any(|lang| lang.code == DEFAULT_REVIEW_LANGUAGE));
    }
}
