use super::OutboundMessage;

#[derive(Debug)]
pub enum Action {
    Send(OutboundMessage),
}
