// src/core/stream_client.rs
//! WebSocket submitter for the gateway's streaming endpoints.
//!
//! One `StreamSubmitter` per submission kind (resume screening, interview
//! scheduling). Each owns at most one live connection; opening while a
//! prior connection is live closes the old one before the new connect
//! begins. The first inbound text frame is the whole answer - the gateway
//! sends free text with no terminal marker.

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::trace;

const SCREENING_SUBMIT_PATH: &str = "/ws/screening/submit";
const SCHEDULE_PATH: &str = "/ws/interviews/schedule";

/// The scheduling form pins the job id; the gateway ignores it.
const SCHEDULE_JOB_ID: &str = "0";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct StreamSubmitter {
    url: String,
    conn: Option<WsStream>,
}

impl StreamSubmitter {
    pub fn screening(ws_base_url: &str) -> Self {
        Self::for_url(format!("{}{}", ws_base_url, SCREENING_SUBMIT_PATH))
    }

    pub fn scheduling(ws_base_url: &str) -> Self {
        Self::for_url(format!("{}{}", ws_base_url, SCHEDULE_PATH))
    }

    pub fn for_url(url: String) -> Self {
        Self { url, conn: None }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Connect to the endpoint. A still-live previous connection is closed
    /// first, and its close handshake completes before the new connect.
    pub async fn open(&mut self) -> Result<()> {
        if self.conn.is_some() {
            trace!("Closing stale connection to {}", self.url);
            self.close().await;
        }

        let (ws, _) = connect_async(self.url.as_str())
            .await
            .with_context(|| format!("Failed to connect to {}", self.url))?;

        trace!("Connected to {}", self.url);
        self.conn = Some(ws);
        Ok(())
    }

    pub async fn send(&mut self, text: &str) -> Result<()> {
        let ws = self.conn.as_mut().context("No open connection")?;
        ws.send(Message::text(text))
            .await
            .context("Failed to send message")
    }

    /// Close the connection and drive the handshake to completion. Errors
    /// on an already-broken connection are irrelevant here.
    pub async fn close(&mut self) {
        if let Some(mut ws) = self.conn.take() {
            let _ = ws.close(None).await;
            while let Some(msg) = ws.next().await {
                if msg.is_err() {
                    break;
                }
            }
        }
    }

    /// Stream a resume, one text message per line, then close from this
    /// side. The reply is read off the closing connection - it arrives
    /// only if the gateway sends it before completing the handshake.
    pub async fn submit_resume(&mut self, resume_text: &str) -> Result<String> {
        self.open().await?;
        let result = self.stream_resume_lines(resume_text).await;
        self.close().await;
        result
    }

    /// Send one comma-joined scheduling request and wait for the reply.
    pub async fn submit_schedule(
        &mut self,
        candidate_name: &str,
        candidate_email: &str,
        slot_id: &str,
    ) -> Result<String> {
        self.open().await?;
        let message = format!(
            "{},{},{},{}",
            candidate_name, candidate_email, SCHEDULE_JOB_ID, slot_id
        );
        let result = self.exchange(&message).await;
        self.close().await;
        result
    }

    async fn stream_resume_lines(&mut self, resume_text: &str) -> Result<String> {
        for line in resume_text.lines() {
            self.send(line).await?;
        }

        let ws = self.conn.as_mut().context("No open connection")?;
        ws.close(None).await.context("Failed to initiate close")?;

        self.await_reply().await
    }

    async fn exchange(&mut self, message: &str) -> Result<String> {
        self.send(message).await?;
        self.await_reply().await
    }

    /// First inbound text frame wins. No reply timeout - a silent gateway
    /// stalls the exchange until the transport gives up.
    async fn await_reply(&mut self) -> Result<String> {
        let ws = self.conn.as_mut().context("No open connection")?;

        while let Some(msg) = ws.next().await {
            match msg.context("Transport error while awaiting reply")? {
                Message::Text(text) => return Ok(text.to_string()),
                Message::Close(_) => break,
                _ => continue,
            }
        }

        anyhow::bail!("Connection closed before a reply arrived")
    }
}
