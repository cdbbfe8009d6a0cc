//! Check command handler

use super::utils::load_declarations;
use crate::cli::CheckArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{DtoSummary, OutputWriter};
use tracing::{info, instrument};

/// Handle the check command
#[instrument(skip(output), fields(file = %args.declarations.display()))]
pub async fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details(
        "check_command",
        &format!("file: {}", args.declarations.display()),
    );
    output.info(&format!("Checking declarations: {}", args.declarations.display()))?;

    let registry = load_declarations(&args.declarations)?;
    info!(dtos = registry.len(), "Declarations are valid");

    output.success(&format!("✓ {} DTO(s) declared", registry.len()))?;
    output.summaries(&DtoSummary::from_registry(&registry))
}
