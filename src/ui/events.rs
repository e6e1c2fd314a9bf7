use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Drains the request queue into the ui state
pub struct EventProcessor {
    state: Rc<RefCell<State>>,
    queue: Rc<MessageQueue<Request>>,
}

impl EventProcessor {
    pub fn new(state: Rc<RefCell<State>>, queue: Rc<MessageQueue<Request>>) -> Self {
        Self { state, queue }
    }

    /// Handles everything queued so far, then lets any due announcement
    /// through. Returns the announcement, if one was made.
    pub fn process(&self, now: Instant) -> Option<String> {
        // announcements made while handling are timed from `now`
        let due = self.state.borrow_mut().tick(now);
        self.read_requests();
        self.state.borrow_mut().tick(now).or(due)
    }

    fn read_requests(&self) {
        let requests = self.queue.read_all();
        if requests.is_empty() {
            return;
        }

        for req in requests {
            trace!("handling: {:?}", req);
            if let Err(err) = self.handle_request(req) {
                error!("cannot handle request: {}", err);
                self.state
                    .borrow_mut()
                    .announce(format!("Something went wrong: {}", err));
            }
        }
    }

    fn handle_request(&self, req: Request) -> Result<(), Error> {
        let mut state = self.state.borrow_mut();

        match req {
            Request::Submit => state.submit()?,
            Request::SetInput(text) => state.set_input(text),
            Request::InsertSample(index) => state.insert_sample(index),

            Request::SelectHistory(index) => state.select_history(index),
            Request::RecallBackward => state.recall_backward(),
            Request::RecallForward => state.recall_forward(),
            Request::ClearHistory => state.clear_history()?,

            Request::ToggleTheme => state.toggle_theme()?,
            Request::SetTheme(theme) => state.set_theme(theme)?,
            Request::ToggleContrast => state.toggle_contrast()?,
            Request::ToggleSidebar => state.toggle_sidebar()?,

            Request::SwitchTab(tab) => state.switch_tab(tab),
            Request::NextTab => {
                let tab = state.page().active_tab.next();
                state.switch_tab(tab)
            }
            Request::PrevTab => {
                let tab = state.page().active_tab.prev();
                state.switch_tab(tab)
            }
            Request::FirstTab => state.switch_tab(Tab::first()),
            Request::LastTab => state.switch_tab(Tab::last()),

            Request::ZoomIn => {
                let zoom = state.settings().zoom.zoomed_in();
                state.set_zoom(zoom)?
            }
            Request::ZoomOut => {
                let zoom = state.settings().zoom.zoomed_out();
                state.set_zoom(zoom)?
            }
            Request::ZoomReset => state.set_zoom(Zoom::default())?,

            Request::OpenDialog(dialog) => state.open_dialog(dialog),
            Request::CloseDialog => state.close_dialog(),

            Request::SetBrailleNotation(notation) => state.set_braille_notation(notation)?,
            Request::SetSpeechStyle(style) => state.set_speech_style(style)?,
            Request::SetNavigationMode(mode) => state.set_navigation_mode(mode)?,

            Request::Render(tab, text) => state.render(tab, text),
            Request::Copy(tab) => state.copy(tab),
            Request::Export(export) => {
                state.export(export)?;
            }
        };

        Ok(())
    }
}
