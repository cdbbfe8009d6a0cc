//! Input and output command handlers
//!
//! `input` runs payloads through the validation interface and prints the
//! validated model. `output` additionally serializes the validated instance
//! back to its wire form. Any rejection fails the command.

use super::utils::{load_declarations, load_payload};
use crate::cli::PayloadArgs;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, PayloadOutcome};
use dtospec_core::dto::validate_batch;
use dtospec_core::{DtoDescriptor, DtoInstance, InputError};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Which view of an accepted instance to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Model,
    Wire,
}

/// Handle the input command
#[instrument(skip(output), fields(file = %args.declarations.display(), dto = %args.dto))]
pub async fn handle_input(args: PayloadArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("input_command", &args.dto);
    run(args, View::Model, output).await
}

/// Handle the output command
#[instrument(skip(output), fields(file = %args.declarations.display(), dto = %args.dto))]
pub async fn handle_output(args: PayloadArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("output_command", &args.dto);
    run(args, View::Wire, output).await
}

async fn run(args: PayloadArgs, view: View, output: &mut OutputWriter) -> Result<()> {
    let registry = load_declarations(&args.declarations)?;
    let dto = Arc::clone(registry.require(&args.dto)?);
    let payload = load_payload(&args.payload)?;

    let results = if args.batch {
        let Value::Array(payloads) = payload else {
            return Err(Error::InvalidFormat {
                path: args.payload.into(),
                expected: "JSON array (--batch)".to_string(),
            });
        };
        debug!(payloads = payloads.len(), "Validating batch");
        validate_batch(Arc::clone(&dto), payloads).await?
    } else {
        vec![dto.input(&payload)]
    };

    let outcomes: Vec<PayloadOutcome> = results
        .iter()
        .map(|result| outcome(&dto, view, result))
        .collect();
    output.outcomes(&outcomes)?;

    let rejected: Vec<&InputError> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    match rejected.as_slice() {
        [] => Ok(()),
        [only] if results.len() == 1 => Err(Error::Rejected {
            dto: dto.name().to_string(),
            message: only.message(),
        }),
        many => {
            warn!(rejected = many.len(), total = results.len(), "Batch had rejections");
            Err(Error::Rejected {
                dto: dto.name().to_string(),
                message: format!("{} of {} payloads rejected", many.len(), results.len()),
            })
        }
    }
}

fn outcome(
    dto: &DtoDescriptor,
    view: View,
    result: &std::result::Result<DtoInstance, InputError>,
) -> PayloadOutcome {
    match result {
        Ok(instance) => match view {
            View::Model => PayloadOutcome::accepted(instance.to_json()),
            View::Wire => PayloadOutcome::accepted(Value::Object(dto.output(instance))),
        },
        Err(err) => PayloadOutcome::rejected(err.message()),
    }
}
