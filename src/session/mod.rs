pub mod state;
pub mod timer;

pub use state::{Session, SessionPhase, StudentIdentity};
pub use timer::{Countdown, SessionTimer, Tick};
