pub mod aggregate;
pub mod conf;
pub mod grammar;
pub mod logging;
pub mod notify;
pub mod pipeline;
pub mod snapshot;
pub mod tail;
