//! `hookflow run` -- execute the flow.

use console::style;

use hookflow_types::flow::{FlowReport, IdentityInput};

use crate::state::AppState;

/// Run the flow.
///
/// Default mode is fire-and-forget: failures are logged by the runner and
/// the command still succeeds. `strict` surfaces the failure as an error
/// and prints the report on success.
pub async fn run_flow(
    state: &AppState,
    name: String,
    reg_no: String,
    email: String,
    strict: bool,
    json: bool,
) -> anyhow::Result<()> {
    if !strict {
        state.runner.run_flow(&name, &reg_no, &email).await;
        return Ok(());
    }

    let identity = IdentityInput::new(name, reg_no, email);
    let report = state.runner.execute(&identity).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &FlowReport) {
    let status = if report.submission.is_success() {
        style(report.submission.status.to_string()).green()
    } else {
        style(report.submission.status.to_string()).yellow()
    };

    println!();
    println!("  {} Flow complete", style("✓").green().bold());
    println!();
    println!("  Webhook:   {}", style(&report.webhook_url).cyan());
    println!(
        "  Payload:   {} ({})",
        report.choice,
        report.choice.resource()
    );
    println!("  Stored at: {}", report.output_path.display());
    println!("  Status:    {status}");
    if report.retried {
        println!("  {}", style("Retried once with 'Bearer ' prefix").dim());
    }
    println!("  Response:  {}", report.submission.body);
    println!();
}
