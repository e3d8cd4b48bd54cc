//! `hookflow config` -- show the resolved configuration.

use console::style;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let config = state.runner.config();

    if json {
        let out = serde_json::json!({
            "path": state.config_path.display().to_string(),
            "payload_origin": state.payload_origin,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("Config").bold(),
        style(state.config_path.display()).dim()
    );
    println!();
    println!("  generate_url:        {}", config.generate_url);
    println!("  fallback_submit_url: {}", config.fallback_submit_url);
    println!("  auth_prefix:         {:?}", config.auth_prefix);
    println!("  output_path:         {}", config.output_path.display());
    println!("  payloads:            {}", state.payload_origin);
    println!("  user_agent:          {}", config.user_agent);
    println!();

    Ok(())
}
