use super::*;

const HELP: &[&str] = &[
    "/theme [light|dark]    toggle or pick the theme",
    "/contrast              toggle high contrast",
    "/sidebar               collapse or expand the sidebar",
    "/zoom <in|out|reset>   change the zoom level",
    "/tab <name|next|prev|first|last>",
    "/example [N]           list or insert an example",
    "/history [html]        list the history",
    "/recall N              load a history entry",
    "/clearhistory          forget the history",
    "/braille <nemeth|ueb>",
    "/speech <verbose|concise|superbrief>",
    "/nav <browse|explore|verbose>",
    "/render <tab> <text>   put text into a tab",
    "/copy <speech|braille> copy a tab to the clipboard",
    "/export <txt|brf>      save the output",
    "/key <key>             press a key",
    "/bind [action [key]]   show or change keybinds",
    "/settings              show the current settings",
    "/about, /audio, /close",
    "/exit",
];

pub(crate) fn help_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::OpenDialog(Dialog::Help));
    Ok(Response::Output(HELP.join("\n")))
}

pub(crate) fn settings_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::OpenDialog(Dialog::Settings));
    let state = ctx.state.borrow();
    let list = Setting::ALL
        .iter()
        .map(|&setting| format!("{}: {}", setting.key(), state.settings().value(setting)))
        .collect::<Vec<_>>();
    Ok(Response::Output(list.join("\n")))
}

pub(crate) fn about_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::OpenDialog(Dialog::About));
    Ok(Response::Output(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )))
}

pub(crate) fn audio_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::OpenDialog(Dialog::Notice(
        "Audio download is not available yet".into(),
    )));
    Ok(Response::Nothing)
}

pub(crate) fn close_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::CloseDialog);
    Ok(Response::Nothing)
}
