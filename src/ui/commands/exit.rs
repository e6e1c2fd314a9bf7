use super::*;

pub(crate) fn exit_command(_ctx: &Context) -> CommandResult {
    Err(Error::ForceExit)
}
