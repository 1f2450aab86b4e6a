use crate::cli::ViewAction;
use crate::context::CliContext;
use crate::output;
use serde_json::json;

pub async fn handle(ctx: &mut CliContext, action: ViewAction) -> anyhow::Result<()> {
    match action {
        ViewAction::Show => {
            output::output_success(json!({ "view": ctx.workspace.view() }));
        }
        ViewAction::Set { view } => {
            let changed = ctx.open(view).await?;
            output::output_success(json!({ "view": view, "changed": changed }));
        }
    }
    Ok(())
}

/// No subcommand: render whatever screen was open last.
pub fn handle_current(ctx: &CliContext) {
    output::output_success(ctx.workspace.screen());
}
