use super::*;

pub(crate) fn history_command(ctx: &Context) -> CommandResult {
    let entries = ctx.state.borrow().history();

    match ctx.parts.get(0) {
        Some(&"html") => {
            let items = view::items(&entries);
            return Ok(Response::Output(view::render_html(&items)));
        }
        Some(arg) => {
            return Err(Error::InvalidArgument(format!(
                "try: /history [html], not {}",
                arg
            )))
        }
        None => {}
    }

    if entries.is_empty() {
        return Ok(Response::Output("No history yet".into()));
    }

    let list = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}: {}", i, view::truncate(entry, view::LABEL_MAX)))
        .collect::<Vec<_>>();
    Ok(Response::Output(list.join("\n")))
}

pub(crate) fn recall_command(ctx: &Context) -> CommandResult {
    let index = parse_arg::<usize>(ctx, "try: /recall N")?;
    ctx.request(Request::SelectHistory(index));
    Ok(Response::Nothing)
}
