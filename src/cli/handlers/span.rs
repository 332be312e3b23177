use crate::cli::args::SpanArgs;
use convkit::{ConvertConfig, SpanUnit, millis_to_fit_time_span, time_span_to_millis};

pub fn handle(args: SpanArgs, config: &ConvertConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(unit) = args.unit {
        println!("{}", time_span_to_millis(args.value, SpanUnit::from(unit)));
        return Ok(());
    }

    let precision = args
        .precision
        .unwrap_or_else(|| config.settings.span_precision());
    let formatted = millis_to_fit_time_span(args.value, precision)
        .ok_or_else(|| format!("Precision must be at least 1, got {}", precision))?;
    println!("{}", formatted);
    Ok(())
}
