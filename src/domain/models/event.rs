use tui_textarea::Input;

use super::InboundMessage;
use super::Page;

#[derive(Debug)]
pub enum Event {
    ConnectionLost(String),
    ConnectionOpened(),
    ConnectionReload(),
    Inbound(InboundMessage),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLN(),
    KeyboardCTRLP(),
    KeyboardCTRLS(),
    KeyboardCTRLT(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIPage(Page),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UISpecializationTick(),
}
