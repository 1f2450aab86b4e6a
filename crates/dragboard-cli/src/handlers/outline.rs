use crate::cli::OutlineAction;
use crate::context::CliContext;
use crate::output;
use dragboard_domain::View;

pub async fn handle(ctx: &mut CliContext, action: OutlineAction) -> anyhow::Result<()> {
    ctx.open(View::Tree).await?;
    match action {
        OutlineAction::Show => {}
        OutlineAction::Replay { script } => {
            let applied = ctx.replay_outline(&script).await?;
            tracing::info!(
                "Replayed {} outline commands from {}",
                applied,
                script.display()
            );
        }
    }
    output::output_success(ctx.workspace.outline().tree().snapshot());
    Ok(())
}
