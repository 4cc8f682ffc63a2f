//! JSON-lines protocol with the launcher host.
//!
//! The host delivers one event per line on stdin and reads one response per
//! line on stdout; stderr carries logs. Events are handled strictly one at
//! a time, and a malformed line never takes the loop down.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use nook_core::Response;

use crate::router::Router;
use crate::tracker::FolderSearch;

/// Inbound host events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The user edited the query text.
    QueryChanged { query: String },

    /// The user activated an item; `payload` is the data this extension
    /// attached to it at render time, echoed back verbatim.
    ItemActivated { payload: serde_json::Value },
}

/// Run the event loop until the host closes stdin.
pub fn run<S, R, W>(router: &Router<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: FolderSearch,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Event>(&line) {
            Ok(Event::QueryChanged { query }) => router.on_query(&query),
            Ok(Event::ItemActivated { payload }) => router.on_activation(payload),
            Err(error) => {
                tracing::warn!("malformed host event: {error}");
                Response::DoNothing
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    Ok(())
}
