use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::FromStr;

use super::*;
use crate::Config;

macro_rules! import {
    ($($name:ident),* $(,)*) => {
        $(
            mod $name;
            use self::$name::*;
        )*
    };
}

import!(
    bind,
    clear_history,
    dialog,
    example,
    exit,
    output,
    preference,
    recall,
    tab,
    theme,
);

#[derive(Debug, PartialEq)]
pub enum Response {
    Nothing,
    Output(String),
}

type CommandResult = Result<Response, Error>;
type Command = fn(&Context) -> CommandResult;

pub(crate) struct Context<'a> {
    pub(crate) state: Rc<RefCell<State>>,
    pub(crate) queue: Rc<MessageQueue<Request>>,
    pub(crate) config: Rc<RefCell<Config>>,
    pub(crate) config_path: Option<&'a Path>,
    pub(crate) parts: &'a [&'a str],
}

impl<'a> Context<'a> {
    pub fn request(&self, req: Request) {
        self.queue.enqueue(req)
    }
}

/// Turns lines of input into requests
pub struct CommandProcessor {
    map: HashMap<&'static str, Command>,
    state: Rc<RefCell<State>>,
    queue: Rc<MessageQueue<Request>>,
    config: Rc<RefCell<Config>>,
    config_path: Option<PathBuf>,
}

impl CommandProcessor {
    pub fn new(
        state: Rc<RefCell<State>>,
        queue: Rc<MessageQueue<Request>>,
        config: Rc<RefCell<Config>>,
    ) -> Self {
        let mut this = CommandProcessor {
            map: HashMap::new(),
            state,
            queue,
            config,
            config_path: None,
        };

        this.map.insert("/theme", theme_command);
        this.map.insert("/contrast", contrast_command);
        this.map.insert("/sidebar", sidebar_command);
        this.map.insert("/zoom", zoom_command);
        this.map.insert("/tab", tab_command);
        this.map.insert("/example", example_command);
        this.map.insert("/history", history_command);
        this.map.insert("/recall", recall_command);
        this.map.insert("/clearhistory", clear_history_command);
        this.map.insert("/braille", braille_command);
        this.map.insert("/speech", speech_command);
        this.map.insert("/nav", nav_command);
        this.map.insert("/render", render_command);
        this.map.insert("/copy", copy_command);
        this.map.insert("/export", export_command);
        this.map.insert("/key", key_command);
        this.map.insert("/bind", bind_command);
        this.map.insert("/help", help_command);
        this.map.insert("/settings", settings_command);
        this.map.insert("/about", about_command);
        this.map.insert("/audio", audio_command);
        this.map.insert("/close", close_command);
        this.map.insert("/exit", exit_command);
        this
    }

    /// Where `/bind` saves the config. Without one, rebinding only lasts
    /// for this run.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn dispatch(&mut self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        if !input.starts_with('/') {
            self.queue.enqueue(Request::SetInput(input.to_string()));
            self.queue.enqueue(Request::Submit);
            return Ok(Response::Nothing);
        }

        let mut input = input.split_whitespace();
        let query = match input.next() {
            Some(query) => query,
            None => return Err(Error::EmptyInput),
        };

        let func = match self.map.get(query) {
            Some(func) => *func,
            None => return Err(Error::UnknownCommand(query.into())),
        };

        trace!("query: {}", query);

        let parts = input.collect::<Vec<_>>();
        let ctx = Context {
            state: Rc::clone(&self.state),
            queue: Rc::clone(&self.queue),
            config: Rc::clone(&self.config),
            config_path: self.config_path.as_ref().map(PathBuf::as_path),
            parts: &parts,
        };

        func(&ctx)
    }
}

fn assume_args(ctx: &Context, msg: &'static str) -> Result<(), Error> {
    if ctx.parts.is_empty() {
        Err(Error::InvalidArgument(msg.into()))?;
    }
    Ok(())
}

/// Parses the first argument, or complains with `msg`
fn parse_arg<T: FromStr>(ctx: &Context, msg: &'static str) -> Result<T, Error> {
    assume_args(ctx, msg)?;
    ctx.parts[0]
        .parse()
        .map_err(|_| Error::InvalidArgument(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{keys, MemoryStore};
    use std::time::Instant;

    struct Harness {
        commands: CommandProcessor,
        events: EventProcessor,
        queue: Rc<MessageQueue<Request>>,
        state: Rc<RefCell<State>>,
        config: Rc<RefCell<Config>>,
    }

    impl Harness {
        fn new() -> Self {
            let config = Rc::new(RefCell::new(Config::default()));
            let state = Rc::new(RefCell::new(State::new(
                Box::new(MemoryStore::new()),
                &config.borrow(),
            )));
            let queue = Rc::new(MessageQueue::new());

            Self {
                commands: CommandProcessor::new(
                    Rc::clone(&state),
                    Rc::clone(&queue),
                    Rc::clone(&config),
                ),
                events: EventProcessor::new(Rc::clone(&state), Rc::clone(&queue)),
                queue,
                state,
                config,
            }
        }

        fn run(&mut self, line: &str) -> CommandResult {
            let res = self.commands.dispatch(line);
            self.events.process(Instant::now());
            res
        }

        fn output(&mut self, line: &str) -> String {
            match self.run(line) {
                Ok(Response::Output(output)) => output,
                other => panic!("expected output for {}, got: {:?}", line, other),
            }
        }
    }

    #[test]
    fn plain_lines_submit() {
        let mut harness = Harness::new();
        assert_eq!(harness.run("x^2 + 1").unwrap(), Response::Nothing);
        assert_eq!(harness.state.borrow().history(), vec!["x^2 + 1"]);
        assert_eq!(harness.state.borrow().page().input(), Some("x^2 + 1"));
    }

    #[test]
    fn errors() {
        let mut harness = Harness::new();
        match harness.run("   ") {
            Err(Error::EmptyInput) => {}
            other => panic!("expected EmptyInput, got: {:?}", other),
        }
        match harness.run("/launch") {
            Err(Error::UnknownCommand(cmd)) => assert_eq!(cmd, "/launch"),
            other => panic!("expected UnknownCommand, got: {:?}", other),
        }
        match harness.run("/zoom sideways") {
            Err(Error::InvalidArgument(..)) => {}
            other => panic!("expected InvalidArgument, got: {:?}", other),
        }
        match harness.run("/exit") {
            Err(Error::ForceExit) => {}
            other => panic!("expected ForceExit, got: {:?}", other),
        }
    }

    #[test]
    fn settings() {
        let mut harness = Harness::new();
        let table = &[
            ("/theme", keys::THEME, "dark"),
            ("/theme light", keys::THEME, "light"),
            ("/contrast", keys::HIGH_CONTRAST, "true"),
            ("/sidebar", keys::SIDEBAR_COLLAPSED, "true"),
            ("/zoom in", keys::ZOOM, "110"),
            ("/zoom reset", keys::ZOOM, "100"),
            ("/braille UEB", keys::BRAILLE_NOTATION, "ueb"),
            ("/speech concise", keys::SPEECH_STYLE, "concise"),
            ("/nav browse", keys::NAVIGATION_MODE, "browse"),
        ];

        for (line, key, expected) in table {
            harness.run(line).unwrap();
            assert_eq!(
                harness.state.borrow().store().get(key),
                Some(expected.to_string()),
                "{}",
                line
            );
        }
    }

    #[test]
    fn tabs() {
        let mut harness = Harness::new();
        let table = &[
            ("/tab braille", Tab::Braille),
            ("/tab next", Tab::Markup),
            ("/tab next", Tab::Speech),
            ("/tab prev", Tab::Markup),
            ("/tab first", Tab::Speech),
            ("/tab last", Tab::Markup),
        ];
        for (line, tab) in table {
            harness.run(line).unwrap();
            assert_eq!(harness.state.borrow().page().active_tab, *tab, "{}", line);
        }
        assert!(harness.run("/tab").is_err());
    }

    #[test]
    fn history_and_recall() {
        let mut harness = Harness::new();
        assert_eq!(harness.output("/history"), "No history yet");

        harness.run("a").unwrap();
        harness.run("b").unwrap();
        assert_eq!(harness.output("/history"), "0: b\n1: a");

        harness.run("/recall 1").unwrap();
        assert_eq!(harness.state.borrow().page().input(), Some("a"));
        assert!(harness.run("/recall one").is_err());

        harness.run("/clearhistory").unwrap();
        assert!(harness.state.borrow().history().is_empty());
        assert_eq!(
            harness.output("/history html"),
            r#"<p class="history-empty">No history yet</p>"#
        );
    }

    #[test]
    fn history_uses_short_labels() {
        let mut harness = Harness::new();
        harness.run(r"\int_0^1 x^2 \, dx + \sum_{n=1}^{10} n").unwrap();
        harness.run("a<b").unwrap();

        assert_eq!(
            harness.output("/history"),
            "0: a<b\n1: \\int_0^1 x^2 \\, dx + \\sum..."
        );

        let html = harness.output("/history html");
        assert!(html.starts_with(r#"<ul class="history-list" role="list">"#));
        assert!(html.contains(r#"data-index="0" title="a&lt;b">a&lt;b</button>"#));
        assert!(html.contains(">\\int_0^1 x^2 \\, dx + \\sum...</button>"));
        assert!(harness.run("/history json").is_err());
    }

    #[test]
    fn examples() {
        let mut harness = Harness::new();
        let list = harness.output("/example");
        assert!(list.starts_with("0: Fraction"));

        harness.run("/example 0").unwrap();
        assert_eq!(harness.state.borrow().page().input(), Some(r"\frac{a}{b}"));
    }

    #[test]
    fn render_and_copy() {
        let mut harness = Harness::new();
        harness.run("/render braille ⠁ ⠃").unwrap();
        assert_eq!(
            harness.state.borrow().page().region(Tab::Braille),
            Some("⠁ ⠃")
        );
        assert!(harness.run("/render braille").is_err());
        assert!(harness.run("/copy markup").is_err());
        harness.run("/copy braille").unwrap();
    }

    #[test]
    fn keys() {
        let mut harness = Harness::new();
        harness.run("/key A-t").unwrap();
        assert_eq!(harness.state.borrow().settings().theme, Theme::Dark);

        // unbound keys do nothing
        harness.run("/key C-q").unwrap();
        assert_eq!(harness.state.borrow().settings().theme, Theme::Dark);

        harness.run("/key F1").unwrap();
        assert_eq!(harness.state.borrow().page().dialog, Some(Dialog::Help));
        harness.run("/key Escape").unwrap();
        assert_eq!(harness.state.borrow().page().dialog, None);
    }

    #[test]
    fn bind() {
        let mut harness = Harness::new();
        assert_eq!(harness.output("/bind toggle_theme"), "toggle_theme -> A-t");
        assert_eq!(
            harness.output("/bind toggle_theme C-t"),
            "toggle_theme A-t -> C-t"
        );
        assert_eq!(
            harness.config.borrow().keybinds.get("toggle_theme"),
            Some(&"C-t".to_string())
        );

        harness.run("/key C-t").unwrap();
        assert_eq!(harness.state.borrow().settings().theme, Theme::Dark);

        assert!(harness.run("/bind launch_rockets").is_err());
        assert!(harness.output("/bind").contains("help -> F1"));
    }

    #[test]
    fn bind_steals_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::config::CONFIG_FILE);

        let mut harness = Harness::new();
        harness.commands = CommandProcessor::new(
            Rc::clone(&harness.state),
            Rc::clone(&harness.queue),
            Rc::clone(&harness.config),
        )
        .with_config_path(&path);

        assert_eq!(harness.output("/bind help A-t"), "help F1 -> A-t");
        assert_eq!(harness.output("/bind help"), "help -> A-t");
        assert_eq!(harness.output("/bind toggle_theme"), "toggle_theme -> unbound");

        harness.run("/key A-t").unwrap();
        assert_eq!(harness.state.borrow().page().dialog, Some(Dialog::Help));
        assert_eq!(harness.state.borrow().settings().theme, Theme::Light);

        let saved = Config::load(&path).unwrap().keybinds();
        assert_eq!(saved.get(&KeyType::from("A-t")), Some(KeyRequest::Help));
        assert_eq!(saved.lookup(KeyRequest::ToggleTheme), None);
    }

    #[test]
    fn bind_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::config::CONFIG_FILE);

        let mut harness = Harness::new();
        harness.commands = CommandProcessor::new(
            Rc::clone(&harness.state),
            Rc::new(MessageQueue::new()),
            Rc::clone(&harness.config),
        )
        .with_config_path(&path);

        harness.run("/bind zoom_in C-Up").unwrap();
        let saved = Config::load(&path).unwrap();
        assert_eq!(
            saved.keybinds().get(&KeyType::from("C-Up")),
            Some(KeyRequest::ZoomIn)
        );
    }

    #[test]
    fn dialogs() {
        let mut harness = Harness::new();
        let help = harness.output("/help");
        assert!(help.contains("/theme"));
        assert_eq!(harness.state.borrow().page().dialog, Some(Dialog::Help));

        harness.run("/audio").unwrap();
        match harness.state.borrow().page().dialog {
            Some(Dialog::Notice(..)) => {}
            ref other => panic!("expected a notice, got: {:?}", other),
        }

        let settings = harness.output("/settings");
        assert!(settings.contains("zoomLevel: 100"));
        assert_eq!(harness.state.borrow().page().dialog, Some(Dialog::Settings));

        harness.run("/close").unwrap();
        assert_eq!(harness.state.borrow().page().dialog, None);
    }
}
