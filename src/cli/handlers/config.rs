//! Handler for the `config` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::config::Config;
use crate::error::Result;

/// Print the configuration after defaults, file and environment are merged
pub fn handle_config_command(ctx: &HandlerContext, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(&ctx.config);
    }

    match Config::default_path() {
        Some(path) => output.info(&format!("# default file: {}", path.display())),
        None => output.warning("No config directory found for this platform"),
    }
    output.info(ctx.config.to_yaml()?.trim_end());
    Ok(())
}
