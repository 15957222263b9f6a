//! Command execution.

mod generate;
mod validate;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;

use generate::execute_generate;
use validate::execute_validate;

/// Execute the command selected on the command line
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    let result = match &args.command {
        Command::Generate {
            manifest,
            out,
            overwrite,
        } => execute_generate(manifest, out, *overwrite, &config).await,
        Command::Validate { manifest } => execute_validate(manifest, &config).await,
    };

    match result {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            log::debug!("{:?}", e);
            config.error_println(&format!(
                "Command '{}' failed: {}",
                args.command.name(),
                e
            ));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() && !config.is_quiet() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
