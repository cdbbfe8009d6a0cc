//! Schema command handler

use super::utils::load_declarations;
use crate::cli::SchemaArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use dtospec_core::DtoDescriptor;
use dtospec_schemas::generate_schemas;
use tracing::{debug, instrument};

/// Handle the schema command
#[instrument(skip(output), fields(file = %args.declarations.display()))]
pub async fn handle_schema(args: SchemaArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("schema_command");
    let registry = load_declarations(&args.declarations)?;

    let selected: Vec<&DtoDescriptor> = if args.dtos.is_empty() {
        registry.descriptors()
    } else {
        args.dtos
            .iter()
            .map(|name| registry.require(name).map(|dto| dto.as_ref()))
            .collect::<dtospec_core::Result<_>>()?
    };
    debug!(dtos = selected.len(), "Generating schemas");

    let document = generate_schemas(&selected);
    output.data(&document)
}
