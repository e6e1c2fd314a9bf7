use super::*;

pub(crate) fn tab_command(ctx: &Context) -> CommandResult {
    const USAGE: &str = "try: /tab <speech|braille|markup|next|prev|first|last>";
    assume_args(ctx, USAGE)?;

    let req = match ctx.parts[0] {
        "next" => Request::NextTab,
        "prev" => Request::PrevTab,
        "first" => Request::FirstTab,
        "last" => Request::LastTab,
        name => Request::SwitchTab(
            name.parse()
                .map_err(|_| Error::InvalidArgument(USAGE.into()))?,
        ),
    };

    ctx.request(req);
    Ok(Response::Nothing)
}
