#[cfg(test)]
#[path = "socket_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use url::Url;

use crate::domain::models::InboundMessage;
use crate::domain::models::OutboundMessage;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Derives the socket address from the dashboard page address: http becomes
/// ws, https becomes wss, the fragment is dropped and `ws` is appended to the
/// path. `http://host:8080/#servers` becomes `ws://host:8080/ws`.
pub fn socket_url(page_url: &str) -> Result<String> {
    let mut url = Url::parse(page_url)?;

    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => bail!(format!("Unsupported scheme {other} in {page_url}")),
    };
    if url.set_scheme(scheme).is_err() {
        bail!(format!("Unable to derive socket address from {page_url}"));
    }

    url.set_fragment(None);
    url.set_query(None);

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str("ws");
    url.set_path(&path);

    return Ok(url.to_string());
}

pub async fn connect(url: &str) -> Result<WsStream> {
    let (stream, _) = tokio_tungstenite::connect_async(url).await?;
    tracing::debug!(url, "Connected to backend");
    return Ok(stream);
}

pub fn encode(msg: &OutboundMessage) -> Result<WsMessage> {
    return Ok(WsMessage::Text(msg.to_json()?));
}

/// Decodes a frame. Text frames are JSON; binary frames are MessagePack, or
/// raw UTF-8 JSON from older backends. Control frames decode to `None`.
pub fn decode(frame: WsMessage) -> Result<Option<InboundMessage>> {
    match frame {
        WsMessage::Text(text) => return InboundMessage::from_json(&text),
        WsMessage::Binary(bytes) => {
            // A MessagePack map never starts with `{`.
            if bytes.first() == Some(&b'{') {
                return InboundMessage::from_json(std::str::from_utf8(&bytes)?);
            }
            return InboundMessage::from_msgpack(&bytes);
        }
        _ => return Ok(None),
    }
}
