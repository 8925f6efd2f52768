/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the options of a container command travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsLocation {
    /// Sent as URL query parameters
    Query,
    /// Sent as the JSON request body
    Body,
}

/// Container sub-command posted to `containers/{cid}/{command}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerCommand {
    /// Start a stopped container
    Start,
    /// Stop a running container (`t` = grace seconds)
    Stop,
    /// Restart a container (`t` = grace seconds)
    Restart,
    /// Send a signal (`signal`)
    Kill,
    /// Freeze all processes
    Pause,
    /// Thaw all processes
    Unpause,
    /// Block until the container stops (`condition`)
    Wait,
    /// Rename the container (`name`)
    Rename,
    /// Resize the TTY (`h`, `w`)
    Resize,
    /// Update resource limits; options are the JSON body
    Update,
    /// Create an exec instance; options are the JSON body
    Exec,
    /// Attach to the container streams
    Attach,
    /// Any other sub-command, sent verbatim and unchecked
    Raw(String),
}

impl ContainerCommand {
    /// Path segment of the command
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ContainerCommand::Start => "start",
            ContainerCommand::Stop => "stop",
            ContainerCommand::Restart => "restart",
            ContainerCommand::Kill => "kill",
            ContainerCommand::Pause => "pause",
            ContainerCommand::Unpause => "unpause",
            ContainerCommand::Wait => "wait",
            ContainerCommand::Rename => "rename",
            ContainerCommand::Resize => "resize",
            ContainerCommand::Update => "update",
            ContainerCommand::Exec => "exec",
            ContainerCommand::Attach => "attach",
            ContainerCommand::Raw(command) => command,
        }
    }

    /// Where this command expects its options
    #[must_use]
    pub fn options_location(&self) -> OptionsLocation {
        match self {
            ContainerCommand::Update | ContainerCommand::Exec => OptionsLocation::Body,
            _ => OptionsLocation::Query,
        }
    }
}

impl fmt::Display for ContainerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerCommand {
    type Err = std::convert::Infallible;

    /// Known commands map to their variant, anything else becomes [`ContainerCommand::Raw`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "start" => ContainerCommand::Start,
            "stop" => ContainerCommand::Stop,
            "restart" => ContainerCommand::Restart,
            "kill" => ContainerCommand::Kill,
            "pause" => ContainerCommand::Pause,
            "unpause" => ContainerCommand::Unpause,
            "wait" => ContainerCommand::Wait,
            "rename" => ContainerCommand::Rename,
            "resize" => ContainerCommand::Resize,
            "update" => ContainerCommand::Update,
            "exec" => ContainerCommand::Exec,
            "attach" => ContainerCommand::Attach,
            other => ContainerCommand::Raw(other.to_string()),
        })
    }
}

impl From<&str> for ContainerCommand {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(command) => command,
            Err(never) => match never {},
        }
    }
}

/// Query of `GET endpoints/{id}/docker/containers/{cid}/logs`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogsOptions {
    /// Include stdout
    pub stdout: bool,
    /// Include stderr
    pub stderr: bool,
    /// Only logs since this UNIX timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Number of trailing lines, or `all`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
    /// Prefix every line with its timestamp
    pub timestamps: bool,
}

impl Default for LogsOptions {
    fn default() -> Self {
        Self {
            stdout: true,
            stderr: true,
            since: None,
            tail: None,
            timestamps: false,
        }
    }
}

impl LogsOptions {
    /// stdout and stderr, whole history, no timestamps
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the since timestamp
    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    /// Keep only the last `lines` lines
    pub fn with_tail(mut self, lines: u32) -> Self {
        self.tail = Some(lines.to_string());
        self
    }

    /// Toggle timestamps
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Toggle stdout
    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    /// Toggle stderr
    pub fn with_stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }
}

/// Header length of a frame in Docker's multiplexed log stream
const FRAME_HEADER_LEN: usize = 8;

/// Output of `GET endpoints/{id}/docker/containers/{cid}/logs`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerLogs {
    /// stdout lines (and stdin echo, if any)
    pub stdout: String,
    /// stderr lines, empty for TTY containers
    pub stderr: String,
    /// Every frame in arrival order
    pub combined: String,
    /// Whether the body was a multiplexed stream
    pub multiplexed: bool,
}

impl ContainerLogs {
    /// Splits a logs response body into its streams
    ///
    /// A body is only treated as multiplexed when it parses end to end as
    /// `[stream, 0, 0, 0, len_be_u32] + payload` frames. Anything else is plain output
    /// and lands in `stdout`. Each stream is decoded as UTF-8 after its frames are
    /// joined, so characters split across frames survive.
    #[must_use]
    pub fn from_bytes(raw: &[u8]) -> Self {
        let Some(frames) = split_frames(raw) else {
            let text = String::from_utf8_lossy(raw).into_owned();
            return Self {
                stdout: text.clone(),
                stderr: String::new(),
                combined: text,
                multiplexed: false,
            };
        };

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut combined = Vec::with_capacity(raw.len());
        for (stream, payload) in frames {
            match stream {
                2 => stderr.extend_from_slice(payload),
                _ => stdout.extend_from_slice(payload),
            }
            combined.extend_from_slice(payload);
        }

        Self {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            combined: String::from_utf8_lossy(&combined).into_owned(),
            multiplexed: true,
        }
    }

    /// True when neither stream produced output
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}

fn split_frames(raw: &[u8]) -> Option<Vec<(u8, &[u8])>> {
    if raw.is_empty() {
        return None;
    }
    let mut frames = Vec::new();
    let mut rest = raw;
    while !rest.is_empty() {
        if rest.len() < FRAME_HEADER_LEN {
            return None;
        }
        let (header, body) = rest.split_at(FRAME_HEADER_LEN);
        if header[0] > 2 || header[1..4] != [0, 0, 0] {
            return None;
        }
        let len = u32::from_be_bytes([header[4], header[5], header[6], header[7]]) as usize;
        if body.len() < len {
            return None;
        }
        let (payload, tail) = body.split_at(len);
        frames.push((header[0], payload));
        rest = tail;
    }
    Some(frames)
}
