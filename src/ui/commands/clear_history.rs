use super::*;

pub(crate) fn clear_history_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::ClearHistory);
    Ok(Response::Nothing)
}
