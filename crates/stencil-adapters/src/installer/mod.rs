//! Package-installer adapters.

mod command;
mod recording;

pub use command::CommandInstaller;
pub use recording::RecordingInstaller;
