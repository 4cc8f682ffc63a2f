//! Activation directives and the custom payloads threaded through the host.
//!
//! The host echoes a [`Custom`](Activation::Custom) activation's payload back
//! verbatim when the item is selected. That round-trip is the only state
//! shared between two event handler calls, so the payload is an explicit
//! tagged type rather than loose key/value data.

use serde::{Deserialize, Serialize};

use crate::item::ResultItem;

/// Kind tag carried inside an [`ActivationPayload`].
///
/// Wire strings are stable; hosts built against older versions may echo
/// payload kinds this build does not know, which deserialize to [`Other`]
/// and are ignored.
///
/// [`Other`]: PayloadKind::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    /// Show the detail submenu for a folder.
    Detail,
    /// Spawn the configured terminal emulator in the folder.
    OpenInTerminal,
    /// Spawn the code editor on the folder.
    OpenInCode,
    /// Anything unrecognized; handled as a no-op.
    #[serde(other)]
    Other,
}

/// Structured data attached to an item and returned by the host on
/// activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationPayload {
    pub action: PayloadKind,
    pub path: String,
}

impl ActivationPayload {
    pub fn new(action: PayloadKind, path: impl Into<String>) -> Self {
        Self {
            action,
            path: path.into(),
        }
    }
}

/// What the host does when an item is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activation {
    /// Close the launcher window.
    HideWindow,

    /// Leave the window as-is.
    DoNothing,

    /// Open a path with the OS default association (file manager for
    /// folders).
    OpenPath { path: String },

    /// Copy text to the system clipboard.
    CopyToClipboard { text: String },

    /// Hand the payload back to the extension as an item-activated event.
    Custom {
        payload: ActivationPayload,
        /// Keep the launcher window open after activation (used when the
        /// activation leads to a submenu rather than a terminal action).
        #[serde(default)]
        keep_open: bool,
    },
}

/// Response returned to the host for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Render a result list.
    RenderList { items: Vec<ResultItem> },

    /// Nothing to render or do.
    DoNothing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let payload = ActivationPayload::new(PayloadKind::Detail, "/tmp/projects");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"action": "detail", "path": "/tmp/projects"})
        );
    }

    #[test]
    fn test_payload_kind_wire_strings() {
        for (kind, s) in [
            (PayloadKind::Detail, "detail"),
            (PayloadKind::OpenInTerminal, "open-in-terminal"),
            (PayloadKind::OpenInCode, "open-in-code"),
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(s));
            assert_eq!(serde_json::from_value::<PayloadKind>(json!(s)).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_payload_kind_is_other() {
        let payload: ActivationPayload =
            serde_json::from_value(json!({"action": "reveal-in-tree", "path": "/x"})).unwrap();
        assert_eq!(payload.action, PayloadKind::Other);
    }

    #[test]
    fn test_custom_activation_round_trip() {
        let activation = Activation::Custom {
            payload: ActivationPayload::new(PayloadKind::OpenInTerminal, "/home/u/src"),
            keep_open: false,
        };
        let text = serde_json::to_string(&activation).unwrap();
        let back: Activation = serde_json::from_str(&text).unwrap();
        assert_eq!(back, activation);
    }
}
