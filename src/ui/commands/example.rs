use super::*;

pub(crate) fn example_command(ctx: &Context) -> CommandResult {
    if ctx.parts.is_empty() {
        let list = samples::SAMPLES
            .iter()
            .enumerate()
            .map(|(i, sample)| format!("{}: {} {}", i, sample.name, sample.latex))
            .collect::<Vec<_>>();
        return Ok(Response::Output(list.join("\n")));
    }

    let index = parse_arg::<usize>(ctx, "try: /example N")?;
    if samples::get(index).is_none() {
        return Err(Error::InvalidArgument(format!(
            "there are only {} examples",
            samples::SAMPLES.len()
        )));
    }

    ctx.request(Request::InsertSample(index));
    Ok(Response::Nothing)
}
