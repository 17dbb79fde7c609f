use std::collections::BTreeSet;

use strum::{Display, EnumIter, IntoEnumIterator};

/// Coarse product category used to relate items with no shared words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Audio,
    Computer,
    Kitchen,
    Furniture,
    Mobile,
    Home,
}

impl Category {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Audio => &[
                "headphone",
                "earbud",
                "speaker",
                "noise",
                "bluetooth",
                "wireless",
                "audio",
            ],
            Category::Computer => &[
                "monitor", "keyboard", "webcam", "usb", "hub", "desk", "display", "uhd", "4k",
            ],
            Category::Kitchen => &[
                "coffee",
                "maker",
                "air",
                "fryer",
                "kettle",
                "cup",
                "countertop",
            ],
            Category::Furniture => &["chair", "lumbar", "ergonomic", "office", "seat"],
            Category::Mobile => &["tablet", "android", "wifi", "storage", "portable"],
            Category::Home => &["lamp", "vacuum", "robot", "fitness", "tracker", "power", "bank"],
        }
    }

    /// A token matches a keyword when either one contains the other.
    fn matches(self, tokens: &[String]) -> bool {
        self.keywords().iter().any(|keyword| {
            tokens
                .iter()
                .any(|token| token.contains(keyword) || keyword.contains(token.as_str()))
        })
    }
}

pub type CategorySet = BTreeSet<Category>;

/// All categories triggered by at least one token.
pub fn infer_categories(tokens: &[String]) -> CategorySet {
    Category::iter().filter(|c| c.matches(tokens)).collect()
}
