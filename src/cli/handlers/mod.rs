//! Command handlers, one module per subcommand

mod admin;
mod common;
mod config;
mod end_user;
mod shell;
mod technician;
mod watch;

pub use admin::handle_admin_command;
pub use common::{HandlerContext, parse_status_changes};
pub use config::handle_config_command;
pub use end_user::{SubmitParams, handle_end_user_command};
pub use shell::handle_shell_command;
pub use technician::handle_technician_command;
pub use watch::{WatchParams, handle_watch_command};
