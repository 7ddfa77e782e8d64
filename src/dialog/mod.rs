//! The conversational dialog engine — question flows, per-phone sessions,
//! and the turn orchestrator.

pub mod flow;
pub mod manager;
pub mod session;

pub use flow::{ProfileField, QuestionFlow};
pub use manager::DialogManager;
pub use session::{DialogStep, Session};
