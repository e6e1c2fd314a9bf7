use super::*;

pub(crate) fn theme_command(ctx: &Context) -> CommandResult {
    if ctx.parts.is_empty() {
        ctx.request(Request::ToggleTheme);
        return Ok(Response::Nothing);
    }

    let theme = parse_arg::<Theme>(ctx, "try: /theme [light|dark]")?;
    ctx.request(Request::SetTheme(theme));
    Ok(Response::Nothing)
}

pub(crate) fn contrast_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::ToggleContrast);
    Ok(Response::Nothing)
}

pub(crate) fn sidebar_command(ctx: &Context) -> CommandResult {
    ctx.request(Request::ToggleSidebar);
    Ok(Response::Nothing)
}

pub(crate) fn zoom_command(ctx: &Context) -> CommandResult {
    const USAGE: &str = "try: /zoom <in|out|reset>";
    assume_args(ctx, USAGE)?;

    let req = match ctx.parts[0] {
        "in" | "+" => Request::ZoomIn,
        "out" | "-" => Request::ZoomOut,
        "reset" | "0" => Request::ZoomReset,
        _ => return Err(Error::InvalidArgument(USAGE.into())),
    };

    ctx.request(req);
    Ok(Response::Nothing)
}
