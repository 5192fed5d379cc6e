mod check;
mod config;
mod init;
mod patch;

pub use check::CheckArgs;
pub use check::OutdatedDirectives;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use patch::PatchArgs;
pub use patch::handle_patch;
