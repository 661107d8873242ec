//! Layout direction, the per-direction string table and title translations.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Fixed UI strings for this direction.
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Direction::Ltr => &ENGLISH,
            Direction::Rtl => &URDU,
        }
    }
}

/// Every fixed label the screen and its rows show.
#[derive(Debug, PartialEq, Eq)]
pub struct UiStrings {
    pub header: &'static str,
    pub search_placeholder: &'static str,
    /// Label of the button that switches to the *other* direction
    pub toggle_label: &'static str,
    pub by_author: &'static str,
    pub published: &'static str,
    pub language: &'static str,
    pub created_at: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub arabic: &'static str,
    pub non_arabic: &'static str,
    pub loading: &'static str,
    pub fetch_failed: &'static str,
    pub retry_hint: &'static str,
    pub no_results: &'static str,
    pub no_cover: &'static str,
}

pub static ENGLISH: UiStrings = UiStrings {
    header: "Books",
    search_placeholder: "Search by book name",
    toggle_label: "RTL",
    by_author: "By ",
    published: "Published: ",
    language: "Language: ",
    created_at: "Created At: ",
    yes: "Yes",
    no: "No",
    arabic: "Arabic",
    non_arabic: "Non-Arabic",
    loading: "Loading books...",
    fetch_failed: "Could not load books",
    retry_hint: "Press Ctrl+R to retry",
    no_results: "No books found",
    no_cover: "[no cover]",
};

pub static URDU: UiStrings = UiStrings {
    header: "کتابیں",
    search_placeholder: "کتاب کا نام تلاش کریں",
    toggle_label: "LTR",
    by_author: "تصنیف: ",
    published: "شائع شدہ: ",
    language: "زبان: ",
    created_at: "تاریخ تخلیق: ",
    yes: "ہاں",
    no: "نہیں",
    arabic: "عربی",
    non_arabic: "غیر عربی",
    loading: "کتابیں لوڈ ہو رہی ہیں...",
    fetch_failed: "کتابیں لوڈ نہیں ہو سکیں",
    retry_hint: "دوبارہ کوشش کے لیے Ctrl+R دبائیں",
    no_results: "کوئی کتاب نہیں ملی",
    no_cover: "[سرورق نہیں]",
};

/// Known titles and their Urdu rendering, consulted only in RTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTranslations {
    entries: HashMap<String, String>,
}

impl TitleTranslations {
    pub fn empty() -> Self {
        TitleTranslations {
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, title: impl Into<String>, localized: impl Into<String>) -> Self {
        self.entries.insert(title.into(), localized.into());
        self
    }

    pub fn lookup(&self, title: &str) -> Option<&str> {
        self.entries.get(title).map(String::as_str)
    }

    /// Title to show for `direction`; the raw title unless RTL has a translation.
    pub fn display_title<'a>(&'a self, title: &'a str, direction: Direction) -> &'a str {
        if direction.is_rtl() {
            self.lookup(title).unwrap_or(title)
        } else {
            title
        }
    }
}

impl Default for TitleTranslations {
    fn default() -> Self {
        TitleTranslations::empty()
            .with_entry("KHUTBAT", "خطبات")
            .with_entry("Haqeeqat e islam", "حقیقتِ اسلام")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Direction::default(), Direction::Ltr);
        assert_eq!(Direction::Ltr.toggled(), Direction::Rtl);
        assert_eq!(Direction::Ltr.toggled().toggled(), Direction::Ltr);
    }

    #[test]
    fn known_titles_translate_only_in_rtl() {
        let t = TitleTranslations::default();
        assert_eq!(t.display_title("KHUTBAT", Direction::Ltr), "KHUTBAT");
        assert_eq!(t.display_title("KHUTBAT", Direction::Rtl), "خطبات");
        assert_eq!(
            t.display_title("Haqeeqat e islam", Direction::Rtl),
            "حقیقتِ اسلام"
        );
        assert_eq!(t.display_title("Other Book", Direction::Rtl), "Other Book");
        // exact match only
        assert_eq!(t.display_title("khutbat", Direction::Rtl), "khutbat");
    }

    #[test]
    fn table_is_extensible() {
        let t = TitleTranslations::empty().with_entry("Seerat", "سیرت");
        assert_eq!(t.display_title("Seerat", Direction::Rtl), "سیرت");
        assert_eq!(t.lookup("KHUTBAT"), None);
    }

    #[test]
    fn string_tables_follow_direction() {
        assert_eq!(Direction::Ltr.strings().header, "Books");
        assert_eq!(Direction::Rtl.strings().header, "کتابیں");
        assert_eq!(Direction::Ltr.strings().toggle_label, "RTL");
        assert_eq!(Direction::Rtl.strings().toggle_label, "LTR");
    }
}
