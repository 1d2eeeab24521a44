mod poller;

pub use poller::{DEFAULT_POLL_INTERVAL, Poller, PollerHandle};
