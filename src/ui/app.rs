use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::*;
use crate::store::Store;
use crate::Config;

/// The line-oriented front end: reads commands, runs them against the page and
/// prints whatever the live region announces.
pub struct App {
    queue: Rc<MessageQueue<Request>>,
    events: EventProcessor,
    commands: CommandProcessor,
    state: Rc<RefCell<State>>,
    config: Rc<RefCell<Config>>,
    delay: Duration,
}

impl App {
    pub fn new(config: Config, store: Box<dyn Store>) -> Self {
        let queue = Rc::new(MessageQueue::new());
        let state = Rc::new(RefCell::new(State::new(store, &config)));
        let delay = config.announce_delay();
        let config = Rc::new(RefCell::new(config));

        let events = EventProcessor::new(Rc::clone(&state), Rc::clone(&queue));
        let commands =
            CommandProcessor::new(Rc::clone(&state), Rc::clone(&queue), Rc::clone(&config));

        Self {
            queue,
            events,
            commands,
            state,
            config,
            delay,
        }
    }

    /// Lets `/bind` save changes back to `path`
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.commands = self.commands.with_config_path(path);
        self
    }

    pub fn state(&self) -> Rc<RefCell<State>> {
        Rc::clone(&self.state)
    }

    /// Queues whatever `key` is bound to. Returns false for unbound keys.
    pub fn key(&self, key: &str) -> bool {
        let keybinds = self.config.borrow().keybinds();
        match keybinds.get(&KeyType::from(key)) {
            Some(req) => {
                self.queue.enqueue(req.into());
                true
            }
            None => {
                debug!("unbound key: {}", key);
                false
            }
        }
    }

    /// Handles queued requests and returns the announcement they produced.
    ///
    /// A terminal has nobody to race against, so the announcer's delay is
    /// treated as already elapsed.
    pub fn step(&self) -> Option<String> {
        let now = Instant::now();
        let first = self.events.process(now);
        self.events.process(now + self.delay).or(first)
    }

    /// Assertive announcements are marked so they stand out from polite ones
    fn announce(&self, writer: &mut impl Write, text: &str) -> io::Result<()> {
        let marker = match self.state.borrow().announcer().politeness() {
            Politeness::Assertive => '!',
            _ => '*',
        };
        writeln!(writer, "{} {}", marker, text)
    }

    pub fn run<R, W>(&mut self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(text) = self.step() {
            self.announce(&mut writer, &text)?;
        }

        for line in reader.lines() {
            let line = line?;
            match self.commands.dispatch(&line) {
                Ok(Response::Output(output)) => writeln!(writer, "{}", output)?,
                Ok(Response::Nothing) => {}
                Err(Error::EmptyInput) => {}
                Err(Error::ForceExit) => break,
                Err(err) => {
                    debug!("command error: {:?}", err);
                    writeln!(writer, "error: {}", err)?
                }
            }

            if let Some(text) = self.step() {
                self.announce(&mut writer, &text)?;
            }
            writer.flush()?;
        }

        // drain anything that was queued before leaving
        self.step();
        Ok(())
    }
}
