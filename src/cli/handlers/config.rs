use crate::cli::args::ConfigAction;
use convkit::{ConvertConfig, is_supported_charset, resolve_charset};

pub fn handle(action: ConfigAction, config: &ConvertConfig) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, config),
        ConfigAction::Charset { name } => handle_charset(&name),
    }
}

fn handle_show(json: bool, config: &ConvertConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &config.settings;
    let charset = resolve_charset(settings.charset()).name();

    if json {
        let output = serde_json::json!({
            "charset": charset,
            "byte_order": settings.byte_order().as_str(),
            "int_width": settings.int_width(),
            "span_precision": settings.span_precision(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("charset:        {}", charset);
    println!("byte_order:     {}", settings.byte_order().as_str());
    println!("int_width:      {}", settings.int_width());
    println!("span_precision: {}", settings.span_precision());
    Ok(())
}

fn handle_charset(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = resolve_charset(name);
    if is_supported_charset(name) {
        println!("{}", encoding.name());
    } else {
        println!("{} (fallback for '{}')", encoding.name(), name);
    }
    Ok(())
}
