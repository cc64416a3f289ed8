use crate::core::config::ui;

/// A selectable button: what the user sees and what comes back on press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub token: String,
}

impl MenuItem {
    /// Item that opens the subfolder `name`
    pub fn folder(name: &str) -> Self {
        Self {
            label: name.to_string(),
            token: name.to_string(),
        }
    }

    /// Item that goes one level up
    pub fn back() -> Self {
        Self {
            label: ui::BACK_LABEL.to_string(),
            token: ui::BACK_TOKEN.to_string(),
        }
    }

    pub fn is_back(&self) -> bool {
        self.token == ui::BACK_TOKEN
    }
}

/// Menu shown for a branch directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// One item per subfolder (in the given order), plus back unless at the root.
    pub fn for_folders<S: AsRef<str>>(folders: &[S], is_root: bool) -> Self {
        let mut items: Vec<MenuItem> = folders.iter().map(|name| MenuItem::folder(name.as_ref())).collect();
        if !is_root {
            items.push(MenuItem::back());
        }
        Self { items }
    }

    pub fn has_back(&self) -> bool {
        self.items.iter().any(MenuItem::is_back)
    }

    /// Tokens of the folder items, back excluded
    pub fn folder_tokens(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| !item.is_back())
            .map(|item| item.token.as_str())
            .collect()
    }
}
