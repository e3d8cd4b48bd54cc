//! `hookflow select` -- dry run of the payload selection rule.

use console::style;

use hookflow_core::payload::select_payload;

pub fn select(reg_no: &str, json: bool) -> anyhow::Result<()> {
    let choice = select_payload(reg_no)?;

    if json {
        let out = serde_json::json!({
            "reg_no": reg_no,
            "payload": choice,
            "resource": choice.resource(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "  {} selects payload {} ({})",
            style(reg_no).cyan(),
            style(choice).bold(),
            choice.resource()
        );
    }

    Ok(())
}
