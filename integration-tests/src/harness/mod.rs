pub mod tracing;
pub mod watch;
pub mod webhook;

pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
pub use watch::TestWatch;
pub use webhook::StubWebhook;
