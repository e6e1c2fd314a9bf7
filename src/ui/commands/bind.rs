use super::*;

pub(crate) fn bind_command(ctx: &Context) -> CommandResult {
    let keybinds = ctx.config.borrow().keybinds();

    match (ctx.parts.get(0), ctx.parts.get(1)) {
        (None, _) => {
            let list = keybinds
                .iter()
                .map(|(req, key)| format!("{} -> {}", req, key))
                .collect::<Vec<_>>();
            Ok(Response::Output(list.join("\n")))
        }

        (Some(action), None) => {
            let req = parse_action(action)?;
            let key = keybinds
                .lookup(req)
                .map(|key| key.to_string())
                .unwrap_or_else(|| "unbound".into());
            Ok(Response::Output(format!("{} -> {}", req, key)))
        }

        (Some(action), Some(value)) => {
            let req = parse_action(action)?;
            let next = KeyType::from(*value);
            if next.is_unbound() {
                return Err(Error::InvalidArgument(format!("invalid key: {}", value)));
            }

            let prev = keybinds
                .lookup(req)
                .map(|key| key.to_string())
                .unwrap_or_else(|| "unbound".into());

            ctx.config.borrow_mut().bind(req, &next);
            if let Some(path) = ctx.config_path {
                save_keybind(path, req, &next);
            }

            Ok(Response::Output(format!("{} {} -> {}", req, prev, next)))
        }
    }
}

pub(crate) fn key_command(ctx: &Context) -> CommandResult {
    assume_args(ctx, "try: /key <key>, like /key A-t")?;

    let key = KeyType::from(ctx.parts[0]);
    match ctx.config.borrow().keybinds().get(&key) {
        Some(req) => ctx.request(req.into()),
        None => debug!("unbound key: {}", ctx.parts[0]),
    }
    Ok(Response::Nothing)
}

fn parse_action(action: &str) -> Result<KeyRequest, Error> {
    KeyRequest::parse(action)
        .ok_or_else(|| Error::InvalidArgument(format!("unknown action: {}", action)))
}

// only the keybind is written back, environment overrides stay out of the file
fn save_keybind(path: &Path, req: KeyRequest, key: &KeyType) {
    let mut config = match Config::load(path) {
        Ok(config) => config,
        Err(crate::config::Error::CannotRead(..)) => Config::default(),
        Err(err) => {
            warn!("not saving keybinds: {}", err);
            return;
        }
    };

    config.bind(req, key);
    if let Err(err) = config.save(path) {
        warn!("cannot save keybinds: {}", err);
    }
}
