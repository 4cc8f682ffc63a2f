//! Event routing: host events in, render directives out.
//!
//! The router holds no state between events. The only thing threaded from
//! one event to the next is the [`ActivationPayload`] the host echoes back
//! when an item is activated.

use nook_core::{
    icons, Activation, ActivationPayload, PayloadKind, Preferences, ResultItem, Response,
    SearchError,
};

use crate::format;
use crate::launch;
use crate::tracker::FolderSearch;

/// Queries shorter than this never reach the search adapter.
const MIN_QUERY_LEN: usize = 3;

/// Maximum number of results rendered.
const MAX_RESULTS: usize = 15;

/// Maps host events to responses.
pub struct Router<S> {
    search: S,
    preferences: Preferences,
    home: String,
}

impl<S: FolderSearch> Router<S> {
    pub fn new(search: S, preferences: Preferences, home: impl Into<String>) -> Self {
        Self {
            search,
            preferences,
            home: home.into(),
        }
    }

    /// Handle a query-changed event.
    pub fn on_query(&self, query: &str) -> Response {
        if query.chars().count() < MIN_QUERY_LEN {
            return placeholder();
        }

        tracing::debug!(query, "searching folders");
        let folders = match self.search.search(query) {
            Ok(folders) => folders,
            Err(error) => {
                tracing::error!("folder search failed: {error}");
                return search_failed(&error);
            }
        };

        if folders.is_empty() {
            return no_results();
        }

        let items = folders
            .iter()
            .take(MAX_RESULTS)
            .map(|folder| {
                let payload =
                    ActivationPayload::new(PayloadKind::Detail, format::decode(folder));
                ResultItem::new(
                    icons::DEFAULT,
                    format::display_name(folder, &self.home),
                    Activation::Custom {
                        payload,
                        // Leads to the detail submenu, not a terminal action.
                        keep_open: true,
                    },
                )
            })
            .collect();

        Response::RenderList { items }
    }

    /// Handle an item-activated event carrying a payload attached at render
    /// time.
    ///
    /// Payloads that fail to deserialize are ignored so an out-of-sync host
    /// cannot wedge the interaction loop.
    pub fn on_activation(&self, payload: serde_json::Value) -> Response {
        let payload: ActivationPayload = match serde_json::from_value(payload) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!("unrecognized activation payload: {error}");
                return Response::DoNothing;
            }
        };

        match payload.action {
            PayloadKind::Detail => detail_menu(&payload.path),
            PayloadKind::OpenInTerminal => {
                launch::open_in_terminal(&self.preferences.default_terminal, &payload.path);
                Response::DoNothing
            }
            PayloadKind::OpenInCode => {
                launch::open_in_code(&payload.path);
                Response::DoNothing
            }
            PayloadKind::Other => Response::DoNothing,
        }
    }
}

fn placeholder() -> Response {
    Response::RenderList {
        items: vec![ResultItem::new(
            icons::DEFAULT,
            "Folder search",
            Activation::HideWindow,
        )
        .with_description("Keep typing to search ...")],
    }
}

fn search_failed(error: &SearchError) -> Response {
    Response::RenderList {
        items: vec![ResultItem::new(
            icons::DEFAULT,
            "An error occurred",
            Activation::HideWindow,
        )
        .with_description(error.to_string())
        .not_highlightable()],
    }
}

fn no_results() -> Response {
    Response::RenderList {
        items: vec![ResultItem::new(
            icons::DEFAULT,
            "No folders found matching your criteria",
            Activation::HideWindow,
        )
        .with_description("If you were expecting results, please check your Tracker index settings")
        .not_highlightable()],
    }
}

/// The fixed submenu for one selected folder.
fn detail_menu(path: &str) -> Response {
    let items = vec![
        ResultItem::new(icons::DEFAULT, path, Activation::DoNothing).not_highlightable(),
        ResultItem::new(
            icons::FOLDER,
            "Open in File Manager",
            Activation::OpenPath {
                path: path.to_string(),
            },
        )
        .not_highlightable(),
        ResultItem::new(
            icons::TERMINAL,
            "Open in Terminal",
            Activation::Custom {
                payload: ActivationPayload::new(PayloadKind::OpenInTerminal, path),
                keep_open: false,
            },
        )
        .not_highlightable(),
        ResultItem::new(
            icons::CODE,
            "Open in VS Code",
            Activation::Custom {
                payload: ActivationPayload::new(PayloadKind::OpenInCode, path),
                keep_open: false,
            },
        )
        .not_highlightable(),
        ResultItem::new(
            icons::COPY,
            "Copy Path to clipboard",
            Activation::CopyToClipboard {
                text: path.to_string(),
            },
        )
        .not_highlightable(),
    ];
    Response::RenderList { items }
}
