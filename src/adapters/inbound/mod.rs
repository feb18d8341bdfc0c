/// Inbound adapters - drive the update use case from user input
mod control_session;

pub use control_session::{ControlEvent, ControlSession, SessionSummary};
