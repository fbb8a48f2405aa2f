#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use futures::SinkExt;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::ConnectionState;
use crate::domain::models::Event;
use crate::domain::models::HealthCheckBox;
use crate::domain::models::OutboundMessage;
use crate::infrastructure::transport::health::HttpHealthCheck;
use crate::infrastructure::transport::socket;
use crate::infrastructure::transport::socket::WsStream;

/// Delay between health checks while degraded. Doubles after each failed
/// check up to `max`, and starts over on every new outage.
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, max: Duration) -> Backoff {
        return Backoff {
            initial,
            max: max.max(initial),
            current: initial,
        };
    }

    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = self.current.saturating_mul(2).min(self.max);
        return delay;
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

enum Disconnect {
    Lost(String),
    Shutdown,
}

pub struct ConnectionService {
    socket_url: String,
    health: HealthCheckBox,
    backoff: Backoff,
    refresh_interval: Duration,
    full_output: bool,
}

impl ConnectionService {
    pub fn new(
        socket_url: String,
        health: HealthCheckBox,
        backoff: Backoff,
        refresh_interval: Duration,
        full_output: bool,
    ) -> ConnectionService {
        return ConnectionService {
            socket_url,
            health,
            backoff,
            refresh_interval,
            full_output,
        };
    }

    pub fn from_config() -> Result<ConnectionService> {
        let millis = |key: ConfigKey| -> Result<Duration> {
            return Ok(Duration::from_millis(Config::get(key).parse::<u64>()?));
        };

        return Ok(ConnectionService::new(
            socket::socket_url(&Config::get(ConfigKey::Url))?,
            Box::<HttpHealthCheck>::default(),
            Backoff::new(
                millis(ConfigKey::HealthCheckInterval)?,
                millis(ConfigKey::HealthCheckMaxInterval)?,
            ),
            millis(ConfigKey::RefreshInterval)?,
            Config::get(ConfigKey::FullOutput) == "true",
        ));
    }

    /// Runs the connection state machine until the UI goes away.
    pub async fn start(
        &mut self,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut state = ConnectionState::Connecting;

        loop {
            tracing::debug!(state = %state, url = self.socket_url, "Connection state");
            state = match state {
                ConnectionState::Connecting | ConnectionState::Connected => {
                    let reason = match self.connect_and_run(&tx, rx).await {
                        Ok(Disconnect::Shutdown) => return Ok(()),
                        Ok(Disconnect::Lost(reason)) => reason,
                        Err(err) => err.to_string(),
                    };

                    tracing::warn!(reason, "Lost connection to backend");
                    tx.send(Event::ConnectionLost(reason))?;
                    ConnectionState::Degraded
                }
                ConnectionState::Degraded => {
                    if !self.wait_until_healthy(rx).await {
                        return Ok(());
                    }

                    tracing::info!("Backend is reachable again, reloading session");
                    tx.send(Event::ConnectionReload())?;
                    ConnectionState::Connecting
                }
            };
        }
    }

    async fn connect_and_run(
        &self,
        tx: &mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<Disconnect> {
        let stream = socket::connect(&self.socket_url).await?;
        tx.send(Event::ConnectionOpened())?;

        return self.run_connected(stream, tx, rx).await;
    }

    async fn run_connected(
        &self,
        stream: WsStream,
        tx: &mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<Disconnect> {
        let (mut sink, mut source) = stream.split();

        let greeting = [
            OutboundMessage::request_info(self.full_output),
            OutboundMessage::GetThemesList,
            OutboundMessage::RequestConfig,
        ];
        for msg in greeting.iter() {
            sink.send(socket::encode(msg)?).await?;
        }

        let mut refresh = time::interval(self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately and the greeting already asked.
        refresh.tick().await;

        loop {
            tokio::select! {
                frame = source.next() => match frame {
                    Some(Ok(WsMessage::Close(_))) => {
                        return Ok(Disconnect::Lost("Backend closed the connection".to_string()));
                    }
                    Some(Ok(frame)) => match socket::decode(frame) {
                        Ok(Some(msg)) => tx.send(Event::Inbound(msg))?,
                        Ok(None) => {}
                        Err(err) => tracing::warn!(error = ?err, "Dropping undecodable frame"),
                    },
                    Some(Err(err)) => return Ok(Disconnect::Lost(err.to_string())),
                    None => return Ok(Disconnect::Lost("Connection closed".to_string())),
                },
                action = rx.recv() => match action {
                    Some(Action::Send(msg)) => {
                        tracing::debug!(msg = ?msg, "Sending to backend");
                        sink.send(socket::encode(&msg)?).await?;
                    }
                    None => return Ok(Disconnect::Shutdown),
                },
                _ = refresh.tick() => {
                    let res = match socket::encode(&OutboundMessage::request_info(self.full_output)) {
                        Ok(frame) => sink.send(frame).await.map_err(anyhow::Error::from),
                        Err(err) => Err(err),
                    };
                    if let Err(err) = res {
                        tracing::debug!(error = ?err, "Skipping roster refresh");
                    }
                }
            }
        }
    }

    /// Health-checks the backend until it answers. Actions sent by the UI in
    /// the meantime have nowhere to go and are dropped. Returns `false` once
    /// the UI has shut down.
    async fn wait_until_healthy(&mut self, rx: &mut mpsc::UnboundedReceiver<Action>) -> bool {
        self.backoff.reset();

        loop {
            let sleep = time::sleep(self.backoff.next_delay());
            tokio::pin!(sleep);

            loop {
                tokio::select! {
                    _ = &mut sleep => break,
                    action = rx.recv() => {
                        if action.is_none() {
                            return false;
                        }
                        tracing::debug!("Dropping action while disconnected");
                    }
                }
            }

            match self.health.check().await {
                Ok(()) => return true,
                Err(err) => tracing::debug!(error = ?err, "Backend still unavailable"),
            }
        }
    }
}
