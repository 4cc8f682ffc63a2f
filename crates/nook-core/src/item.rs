//! Result item types rendered by the launcher host.

use serde::{Deserialize, Serialize};

use crate::action::Activation;

/// Icon references shipped with the extension, resolved by the host.
pub mod icons {
    /// Generic extension icon, used for results and status items.
    pub const DEFAULT: &str = "images/icon.png";
    pub const FOLDER: &str = "images/folder.png";
    pub const TERMINAL: &str = "images/terminal.png";
    pub const CODE: &str = "images/vscode-icon.png";
    pub const COPY: &str = "images/copy-clipboard.png";
}

/// A single entry in a rendered result list.
///
/// Everything users see and select is a result item. The attached
/// [`Activation`] tells the host what to do when the item is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Icon identifier (a path relative to the extension directory).
    pub icon: String,

    /// Primary display text.
    pub name: String,

    /// Secondary display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the host may highlight query matches within the name.
    /// Status and submenu entries disable this.
    #[serde(default = "default_true")]
    pub highlightable: bool,

    /// What happens when the user activates this item.
    pub on_enter: Activation,
}

fn default_true() -> bool {
    true
}

impl ResultItem {
    /// Create a highlightable item with no description.
    pub fn new(icon: &str, name: impl Into<String>, on_enter: Activation) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.into(),
            description: None,
            highlightable: true,
            on_enter,
        }
    }

    /// Set the secondary display text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the item as a static entry the host must not match-highlight.
    pub fn not_highlightable(mut self) -> Self {
        self.highlightable = false;
        self
    }
}
