// Host component protocol: typed messages plus a JSON-lines transport.
//
// Outbound messages carry the same envelope the host framework's component
// library posts to its parent frame. Inbound, only render events matter.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{BridgeError, Result};
use crate::state::Position;

pub const API_VERSION: u32 = 1;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },

    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight { height: u32 },

    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        value: Vec<String>,
        data_type: &'static str,
    },
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "isStreamlitMessage")]
    is_streamlit_message: bool,
    #[serde(flatten)]
    message: &'a HostMessage,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum HostEvent {
    #[serde(rename = "streamlit:render")]
    Render {
        #[serde(default, deserialize_with = "lenient_args")]
        args: Option<RenderArgs>,
    },
    #[serde(other)]
    Other,
}

/// Arguments bundle of a render event.
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct RenderArgs {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub positions: Vec<String>,
}

// A render with a non-object `args` still counts as a render, with no arguments.
fn lenient_args<'de, D>(deserializer: D) -> std::result::Result<Option<RenderArgs>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(args @ Value::Object(_)) => serde_json::from_value(args).ok(),
        _ => None,
    })
}

// Absent, null or non-list `positions` is an empty list; non-string items are dropped.
fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Where outbound messages go.
pub trait HostChannel {
    fn send(&mut self, message: &HostMessage) -> Result<()>;
}

/// One JSON object per line, flushed after each message.
pub struct JsonLinesChannel<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesChannel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HostChannel for JsonLinesChannel<W> {
    fn send(&mut self, message: &HostMessage) -> Result<()> {
        let envelope = Envelope {
            is_streamlit_message: true,
            message,
        };
        let mut line = serde_json::to_vec(&envelope).map_err(|source| BridgeError::Encode { source })?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .and_then(|()| self.writer.flush())
            .map_err(|source| BridgeError::Write { source })
    }
}

/// Pushes state to the host. Transport failures are logged, never surfaced.
pub struct BridgeNotifier {
    channel: Box<dyn HostChannel>,
}

impl BridgeNotifier {
    pub fn new(channel: Box<dyn HostChannel>) -> Self {
        Self { channel }
    }

    pub fn announce_ready(&mut self) {
        self.send(HostMessage::ComponentReady {
            api_version: API_VERSION,
        });
    }

    pub fn declare_frame_height(&mut self, height: u32) {
        self.send(HostMessage::SetFrameHeight { height });
    }

    /// Startup half of the handshake.
    pub fn handshake(&mut self, height: u32) {
        info!("Announcing readiness, frame height {height}px");
        self.announce_ready();
        self.declare_frame_height(height);
    }

    pub fn publish(&mut self, selection: &[Position]) {
        let value: Vec<String> = selection.iter().map(Position::label).collect();
        debug!("Publishing {value:?}");
        self.send(HostMessage::SetComponentValue {
            value,
            data_type: "json",
        });
    }

    fn send(&mut self, message: HostMessage) {
        if let Err(e) = self.channel.send(&message) {
            warn!("Host did not receive {message:?}: {e}");
        }
    }
}

/// Decode one inbound line. Blank lines are skipped silently.
pub fn parse_event(line: &str) -> Option<HostEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!("Skipping undecodable host message: {e}");
            None
        }
    }
}

/// Block until the host's first render event. `None` means the host closed
/// the channel without rendering.
pub fn read_first_render<R: BufRead>(reader: &mut R) -> Result<Option<RenderArgs>> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .map_err(|source| BridgeError::Read { source })?;
        if n == 0 {
            return Ok(None);
        }
        match parse_event(&line) {
            Some(HostEvent::Render { args }) => return Ok(Some(args.unwrap_or_default())),
            Some(HostEvent::Other) => debug!("Ignoring non-render host message before first render"),
            None => {}
        }
    }
}

/// Consume the rest of the inbound stream. The grid is built from the first
/// render only, so later render events are logged and dropped.
pub fn drain_events<R: BufRead>(reader: R) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Host channel read failed: {e}");
                return;
            }
        };
        if let Some(HostEvent::Render { args }) = parse_event(&line) {
            let positions = args.map(|a| a.positions.len()).unwrap_or(0);
            info!("Ignoring re-render with {positions} positions; grid already built");
        }
    }
    debug!("Host closed the channel");
}
