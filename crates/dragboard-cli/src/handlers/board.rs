use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use dragboard_domain::View;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    ctx.open(View::Kanban).await?;
    match action {
        BoardAction::Show => {}
        BoardAction::Replay { script } => {
            let applied = ctx.replay_board(&script).await?;
            tracing::info!("Replayed {} board commands from {}", applied, script.display());
        }
    }
    output::output_success(ctx.workspace.board().store().snapshot());
    Ok(())
}
