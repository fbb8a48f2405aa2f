/// Lifecycle of the backend socket. `Degraded` is entered on any error or
/// close and is only left through a successful health check, which reloads
/// the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected,
    Degraded,
}
