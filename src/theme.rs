//! Built-in default design tokens.
//!
//! The default theme is the base every resolution pass merges user overrides
//! into. It is constructed once per process and never mutated; callers clone
//! subtrees as needed.

use crate::token::{TokenTree, TokenValue};
use once_cell::sync::Lazy;

static DEFAULT_THEME: Lazy<TokenTree> = Lazy::new(build_default_theme);

/// The built-in default token tree.
pub fn default_theme() -> &'static TokenTree {
    &DEFAULT_THEME
}

fn table(entries: &[(&str, TokenValue)]) -> TokenValue {
    TokenValue::Tree(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect(),
    )
}

fn pairs(entries: &[(&str, &str)]) -> TokenValue {
    TokenValue::Tree(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), TokenValue::from(*value)))
            .collect(),
    )
}

fn chain(names: &[&str]) -> TokenValue {
    TokenValue::Sequence(names.iter().map(|name| (*name).to_string()).collect())
}

fn build_default_theme() -> TokenTree {
    let mut theme = TokenTree::new();

    theme.insert(
        "screens",
        pairs(&[
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ]),
    );

    theme.insert(
        "colors",
        table(&[
            ("inherit", TokenValue::from("inherit")),
            ("current", TokenValue::from("currentColor")),
            ("transparent", TokenValue::from("transparent")),
            ("black", TokenValue::from("#000000")),
            ("white", TokenValue::from("#ffffff")),
            (
                "gray",
                pairs(&[
                    ("50", "#f9fafb"),
                    ("100", "#f3f4f6"),
                    ("200", "#e5e7eb"),
                    ("300", "#d1d5db"),
                    ("400", "#9ca3af"),
                    ("500", "#6b7280"),
                    ("600", "#4b5563"),
                    ("700", "#374151"),
                    ("800", "#1f2937"),
                    ("900", "#111827"),
                ]),
            ),
            (
                "blue",
                pairs(&[
                    ("50", "#eff6ff"),
                    ("100", "#dbeafe"),
                    ("200", "#bfdbfe"),
                    ("300", "#93c5fd"),
                    ("400", "#60a5fa"),
                    ("500", "#3b82f6"),
                    ("600", "#2563eb"),
                    ("700", "#1d4ed8"),
                    ("800", "#1e40af"),
                    ("900", "#1e3a8a"),
                ]),
            ),
            (
                "red",
                pairs(&[
                    ("50", "#fef2f2"),
                    ("100", "#fee2e2"),
                    ("200", "#fecaca"),
                    ("300", "#fca5a5"),
                    ("400", "#f87171"),
                    ("500", "#ef4444"),
                    ("600", "#dc2626"),
                    ("700", "#b91c1c"),
                    ("800", "#991b1b"),
                    ("900", "#7f1d1d"),
                ]),
            ),
        ]),
    );

    theme.insert(
        "spacing",
        pairs(&[
            ("px", "1px"),
            ("0", "0px"),
            ("0.5", "0.125rem"),
            ("1", "0.25rem"),
            ("1.5", "0.375rem"),
            ("2", "0.5rem"),
            ("2.5", "0.625rem"),
            ("3", "0.75rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("10", "2.5rem"),
            ("12", "3rem"),
            ("16", "4rem"),
            ("20", "5rem"),
            ("24", "6rem"),
            ("32", "8rem"),
            ("40", "10rem"),
            ("48", "12rem"),
            ("64", "16rem"),
            ("96", "24rem"),
        ]),
    );

    theme.insert(
        "font_family",
        table(&[
            (
                "sans",
                chain(&[
                    "ui-sans-serif",
                    "system-ui",
                    "sans-serif",
                    "Apple Color Emoji",
                    "Segoe UI Emoji",
                    "Segoe UI Symbol",
                    "Noto Color Emoji",
                ]),
            ),
            (
                "serif",
                chain(&["ui-serif", "Georgia", "Cambria", "Times New Roman", "serif"]),
            ),
            (
                "mono",
                chain(&[
                    "ui-monospace",
                    "SFMono-Regular",
                    "Menlo",
                    "Consolas",
                    "Liberation Mono",
                    "monospace",
                ]),
            ),
        ]),
    );

    theme.insert(
        "font_size",
        pairs(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
        ]),
    );

    theme.insert(
        "font_weight",
        pairs(&[
            ("thin", "100"),
            ("light", "300"),
            ("normal", "400"),
            ("medium", "500"),
            ("semibold", "600"),
            ("bold", "700"),
            ("black", "900"),
        ]),
    );

    theme.insert(
        "border_radius",
        pairs(&[
            ("none", "0px"),
            ("sm", "0.125rem"),
            ("default", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("full", "9999px"),
        ]),
    );

    theme
}
