use super::*;

pub(crate) fn render_command(ctx: &Context) -> CommandResult {
    const USAGE: &str = "try: /render <speech|braille|markup> <text>";
    let tab = parse_arg::<Tab>(ctx, USAGE)?;
    if ctx.parts.len() < 2 {
        return Err(Error::InvalidArgument(USAGE.into()));
    }

    ctx.request(Request::Render(tab, ctx.parts[1..].join(" ")));
    Ok(Response::Nothing)
}

pub(crate) fn copy_command(ctx: &Context) -> CommandResult {
    const USAGE: &str = "try: /copy <speech|braille>";
    let tab = match parse_arg(ctx, USAGE)? {
        Tab::Markup => return Err(Error::InvalidArgument(USAGE.into())),
        tab => tab,
    };

    ctx.request(Request::Copy(tab));
    Ok(Response::Nothing)
}

pub(crate) fn export_command(ctx: &Context) -> CommandResult {
    let export = parse_arg(ctx, "try: /export <txt|brf>")?;
    ctx.request(Request::Export(export));
    Ok(Response::Nothing)
}
