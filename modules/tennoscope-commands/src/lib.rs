//! The two chat-facing queries, each a one-shot fetch → decode → render
//! pipeline. The command dispatcher lives outside this crate and talks to
//! us through `ReplySink`; nothing here panics its way back to it — every
//! failure becomes one prefixed text line at a single boundary.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use tennoscope_client::{FetchError, WorldStateClient};
use tennoscope_core::{render_plains, render_sortie, WorldState};

/// Default endpoint. The language query parameter selects the display
/// language of upstream-formatted strings like `timeLeft`.
pub const DEFAULT_API_URL: &str = "https://api.warframestat.us/pc?language=zh";

/// Seam over the network fetch so command flows are testable with canned
/// outcomes.
#[async_trait]
pub trait WorldStateFetch: Send + Sync {
    async fn fetch(&self, url: &str) -> tennoscope_client::Result<String>;
}

#[async_trait]
impl WorldStateFetch for WorldStateClient {
    async fn fetch(&self, url: &str) -> tennoscope_client::Result<String> {
        WorldStateClient::fetch(self, url).await
    }
}

/// Outbound reply events, delivered to whatever chat platform the external
/// dispatcher fronts.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, text: String) -> Result<()>;
}

pub struct WorldStateCommands {
    fetcher: Arc<dyn WorldStateFetch>,
    api_url: String,
}

impl WorldStateCommands {
    pub fn new(fetcher: Arc<dyn WorldStateFetch>, api_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_url: api_url.into(),
        }
    }

    /// Trigger 1: open-world cycle overview. Sends a connecting
    /// acknowledgment up front, then exactly one final message.
    pub async fn plains(&self, sink: &dyn ReplySink) -> Result<()> {
        sink.send("📡 正在连接虚空 (TLS指纹模式)...".to_string()).await?;

        let text = match self.load().await {
            Ok(ws) => render_plains(&ws),
            Err(line) => line,
        };
        sink.send(text).await
    }

    /// Trigger 2: daily sortie. One final message only.
    pub async fn sortie(&self, sink: &dyn ReplySink) -> Result<()> {
        let text = match self.load().await {
            Ok(ws) => render_sortie(ws.sortie.as_ref()),
            Err(line) => line,
        };
        sink.send(text).await
    }

    /// Fetch and decode one fresh snapshot. Failures come back as the
    /// user-facing line — this is the only place errors turn into text.
    async fn load(&self) -> std::result::Result<WorldState, String> {
        let raw = match self.fetcher.fetch(&self.api_url).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "Worldstate fetch failed");
                return Err(failure_line(&err));
            }
        };

        WorldState::decode(&raw).map_err(|err| {
            warn!(error = %err, "Worldstate body did not parse");
            format!("❌ 响应解析失败: {err}")
        })
    }
}

/// Map each fetch failure to its own prefixed line, so a user can tell
/// "blocked" from "upstream broken" from "network problem".
pub fn failure_line(err: &FetchError) -> String {
    match err {
        FetchError::AntiBotBlocked => "❌ 403被拦截 (即使伪装也被挡，IP信誉过低)".to_string(),
        FetchError::Http { status } => format!("❌ API请求失败: {status}"),
        FetchError::Transport(message) => format!("❌ 请求异常: {message}"),
    }
}
