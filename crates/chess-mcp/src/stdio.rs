//! Line framing between a byte stream and the rmcp service.
//!
//! rmcp ends the session on the first line it cannot decode, so every
//! inbound line is screened first. Lines that would not decode as a client
//! message are answered here with a JSON-RPC error (or dropped, for
//! notifications) and never reach the service.

use std::error::Error;
use std::io;

use rmcp::model::{ClientJsonRpcMessage, ErrorData};
use rmcp::ServiceExt;
use serde_json::{json, Value};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, DuplexStream,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::server::ChessServer;

pub type BoxError = Box<dyn Error + Send + Sync>;

const PIPE_CAPACITY: usize = 64 * 1024;

/// What to do with one inbound line.
#[derive(Debug)]
pub enum Screened {
    /// Hand the line to the service.
    Forward,
    /// Undecodable notification; nothing to answer.
    Drop,
    /// Answer with this error response instead.
    Reject(Value),
}

/// Decide whether a raw line can go to the service.
pub fn screen(line: &[u8]) -> Screened {
    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(e) => {
            return Screened::Reject(error_response(
                Value::Null,
                ErrorData::parse_error(format!("Parse error: {}", e), None),
            ))
        }
    };

    let id = match value.get("id") {
        Some(id @ (Value::String(_) | Value::Number(_))) => Some(id.clone()),
        Some(_) => Some(Value::Null),
        None => None,
    };
    let is_request = id.is_some() || value.get("method").is_none();

    match serde_json::from_value::<ClientJsonRpcMessage>(value) {
        Ok(_) => Screened::Forward,
        Err(e) if is_request => Screened::Reject(error_response(
            id.unwrap_or(Value::Null),
            ErrorData::invalid_request(format!("Invalid request: {}", e), None),
        )),
        Err(e) => {
            warn!("Dropping undecodable notification: {}", e);
            Screened::Drop
        }
    }
}

fn error_response(id: Value, error: ErrorData) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error,
    })
}

/// Run `server` over a newline-delimited stream until `input` closes.
pub async fn serve<R, W>(server: ChessServer, input: R, output: W) -> Result<(), BoxError>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (service_in, forward) = tokio::io::duplex(PIPE_CAPACITY);
    let (service_out, replies) = tokio::io::duplex(PIPE_CAPACITY);
    let (reject_tx, reject_rx) = mpsc::unbounded_channel();

    let reader = tokio::spawn(read_input(BufReader::new(input), forward, reject_tx));
    let writer = tokio::spawn(write_output(BufReader::new(replies), reject_rx, output));

    let running = server.serve((service_in, service_out)).await?;
    let reason = running.waiting().await?;
    info!("Session ended: {:?}", reason);

    // Only still running if the service quit while input stayed open.
    reader.abort();
    writer.await??;
    Ok(())
}

async fn read_input<R: AsyncBufRead + Unpin>(
    mut input: R,
    mut forward: DuplexStream,
    rejects: mpsc::UnboundedSender<String>,
) -> io::Result<()> {
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let message = line.trim_ascii();
        if message.is_empty() {
            continue;
        }

        match screen(message) {
            Screened::Forward => {
                forward.write_all(message).await?;
                forward.write_all(b"\n").await?;
            }
            Screened::Drop => {}
            Screened::Reject(response) => {
                warn!("Rejected inbound line: {}", response["error"]["message"]);
                // Receiver only goes away once the writer has stopped.
                let _ = rejects.send(response.to_string());
            }
        }
    }

    info!("Input closed");
    Ok(())
}

async fn write_output<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin>(
    replies: R,
    mut rejects: mpsc::UnboundedReceiver<String>,
    mut output: W,
) -> io::Result<()> {
    let mut replies = replies.lines();
    let mut rejects_open = true;

    loop {
        let line = tokio::select! {
            reply = replies.next_line() => match reply? {
                Some(line) => line,
                None => break,
            },
            reject = rejects.recv(), if rejects_open => match reject {
                Some(line) => line,
                None => {
                    rejects_open = false;
                    continue;
                }
            },
        };

        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
