use super::*;

pub(crate) fn braille_command(ctx: &Context) -> CommandResult {
    let notation = parse_arg(ctx, "try: /braille <nemeth|ueb>")?;
    ctx.request(Request::SetBrailleNotation(notation));
    Ok(Response::Nothing)
}

pub(crate) fn speech_command(ctx: &Context) -> CommandResult {
    let style = parse_arg(ctx, "try: /speech <verbose|concise|superbrief>")?;
    ctx.request(Request::SetSpeechStyle(style));
    Ok(Response::Nothing)
}

pub(crate) fn nav_command(ctx: &Context) -> CommandResult {
    let mode = parse_arg(ctx, "try: /nav <browse|explore|verbose>")?;
    ctx.request(Request::SetNavigationMode(mode));
    Ok(Response::Nothing)
}
