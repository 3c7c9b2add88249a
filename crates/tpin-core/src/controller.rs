//! The interactive session menu.
//!
//! Every key is dispatched to an [`Action`], applied to the store and
//! cursor, and followed by the update cycle: refresh the live sessions,
//! reconcile, clamp the cursor, save the pinned list, redraw.

use tracing::{debug, info, trace, warn};

use crate::console::Console;
use crate::cursor::{CursorModel, Region};
use crate::error::{PinError, PinResult};
use crate::keymap::{self, Action};
use crate::multiplexer::Multiplexer;
use crate::persist::PinStorage;
use crate::store::SessionStore;
use crate::view;

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the menu normally.
    Exit,
    /// Leave the menu because the user pressed Ctrl-C.
    Interrupted,
}

pub struct SessionController<M, S> {
    mux: M,
    store: SessionStore<S>,
    cursor: CursorModel,
    /// Session the cursor should land on after the next refresh.
    focus: Option<String>,
    /// Message shown once under the menu on the next redraw.
    status: Option<String>,
}

impl<M: Multiplexer, S: PinStorage> SessionController<M, S> {
    /// Load the pinned list, read the live sessions and put the cursor on
    /// the current session (or the first entry if it is not listed).
    pub fn new(mux: M, storage: S) -> PinResult<Self> {
        let mut store = SessionStore::load(storage)?;
        store.refresh(&mux.list_sessions()?);

        let current = mux.current_session()?;
        let index = store.position(&current).unwrap_or(0);
        let cursor = CursorModel::new(index, store.pinned().len());
        debug!(current = %current, cursor = index, "initialized");

        Ok(Self {
            mux,
            store,
            cursor,
            focus: None,
            status: None,
        })
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn cursor(&self) -> &CursorModel {
        &self.cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Pinned list with the cursor marker, as printed by `list`.
    pub fn pinned_listing(&self) -> String {
        view::render_rows(self.store.pinned(), Some(self.cursor.index()))
    }

    /// Switch to pinned slot `slot` (1-based).
    pub fn switch_to_slot(&mut self, slot: usize) -> PinResult<()> {
        let len = self.store.pinned().len();
        if slot == 0 || slot > len {
            return Err(PinError::SlotOutOfRange { slot });
        }
        self.cursor.set(slot - 1, len);
        let name = self.store.pinned()[slot - 1].clone();
        info!(slot, session = %name, "switching to pinned slot");
        self.mux.switch_to(&name)
    }

    /// Run the menu until the user leaves it.
    pub fn run<C: Console>(&mut self, console: &mut C) -> PinResult<Flow> {
        self.redraw(console)?;
        loop {
            let key = console.read_key()?;
            let action = keymap::dispatch(self.cursor.region(), key);
            trace!(?key, ?action, region = ?self.cursor.region(), "key received");

            match self.handle(action, console)? {
                Flow::Continue => self.update(console)?,
                flow => return Ok(flow),
            }
        }
    }

    /// Apply one action. Returns an error only when a leaving action fails.
    pub fn handle<C: Console>(&mut self, action: Action, console: &mut C) -> PinResult<Flow> {
        let pinned_len = self.store.pinned().len();
        let total = self.store.total();

        match action {
            Action::Interrupt => return Ok(Flow::Interrupted),
            Action::Quit => return Ok(Flow::Exit),
            Action::Select => {
                if let Some(name) = self.selected()? {
                    info!(session = %name, "switching");
                    self.mux.switch_to(&name)?;
                }
                return Ok(Flow::Exit);
            }
            Action::QuickSwitch(slot) => {
                self.switch_to_slot(slot)?;
                return Ok(Flow::Exit);
            }
            Action::Move(delta) => self.cursor.move_by(delta, total, pinned_len),
            Action::SwapNext => {
                let target = self.cursor.index() + 1;
                self.cursor.swap(self.store.pinned_mut(), target);
            }
            Action::SwapPrev => {
                if let Some(target) = self.cursor.index().checked_sub(1) {
                    self.cursor.swap(self.store.pinned_mut(), target);
                }
            }
            Action::Reposition(target) => self.cursor.reposition(self.store.pinned_mut(), target),
            Action::Pin if self.cursor.region() == Region::Unpinned => {
                if let Some(name) = self.selected()? {
                    self.store.pin(&name);
                    self.focus = Some(name);
                }
            }
            Action::Unpin if self.cursor.region() == Region::Pinned => {
                self.store.unpin(self.cursor.index())?;
            }
            Action::Pin | Action::Unpin => {}
            Action::NewSession => return self.new_session(console),
            Action::Rename => self.rename(console)?,
            Action::Kill => self.kill(console)?,
            Action::Ignore => {}
        }
        Ok(Flow::Continue)
    }

    /// Refresh, reconcile, place the cursor, save, redraw.
    pub fn update<C: Console>(&mut self, console: &mut C) -> PinResult<()> {
        self.refresh();
        if let Err(e) = self.store.save() {
            warn!("failed to save pinned sessions: {e}");
            self.report(format!("failed to save pinned sessions: {e}"));
        }
        self.redraw(console)
    }

    fn refresh(&mut self) {
        match self.mux.list_sessions() {
            Ok(all) => self.store.refresh(&all),
            Err(e) => {
                warn!("failed to list sessions: {e}");
                self.report(e.to_string());
            }
        }

        let pinned_len = self.store.pinned().len();
        if let Some(name) = self.focus.take() {
            if let Some(index) = self.store.position(&name) {
                self.cursor.set(index, pinned_len);
            }
        }
        self.cursor.clamp(self.store.total(), pinned_len);
    }

    fn redraw<C: Console>(&mut self, console: &mut C) -> PinResult<()> {
        let screen = view::render_menu(
            self.store.pinned(),
            self.store.unpinned(),
            self.cursor.index(),
            self.status.as_deref(),
        );
        self.status = None;
        console.draw(&screen)
    }

    fn report(&mut self, message: String) {
        self.status = Some(message);
    }

    fn selected(&self) -> PinResult<Option<String>> {
        if self.store.total() == 0 {
            return Ok(None);
        }
        self.cursor
            .selected_name(self.store.pinned(), self.store.unpinned())
            .map(|name| Some(name.to_string()))
    }

    fn new_session<C: Console>(&mut self, console: &mut C) -> PinResult<Flow> {
        let name = console.read_line("Enter new session name: ")?;
        if name.is_empty() {
            return Ok(Flow::Continue);
        }
        if self.mux.session_exists(&name) {
            self.report(PinError::NameCollision(name).to_string());
            return Ok(Flow::Continue);
        }
        if let Err(e) = self.mux.create_session(&name) {
            warn!(session = %name, "create failed: {e}");
            self.report(e.to_string());
            return Ok(Flow::Continue);
        }
        info!(session = %name, "created session");

        if console.confirm(&format!("Press Enter to switch to '{name}'"))? {
            self.mux.switch_to(&name)?;
            return Ok(Flow::Exit);
        }
        self.focus = Some(name);
        Ok(Flow::Continue)
    }

    fn rename<C: Console>(&mut self, console: &mut C) -> PinResult<()> {
        let Some(old) = self.selected()? else {
            return Ok(());
        };
        let new = console.read_line(&format!("Rename '{old}' to: "))?;
        if new.is_empty() || new == old {
            return Ok(());
        }
        if self.mux.session_exists(&new) {
            info!(from = %old, to = %new, "rename refused, name taken");
            self.report(PinError::NameCollision(new).to_string());
            return Ok(());
        }
        if let Err(e) = self.mux.rename_session(&old, &new) {
            warn!(from = %old, to = %new, "rename failed: {e}");
            self.report(e.to_string());
            return Ok(());
        }
        info!(from = %old, to = %new, "renamed session");
        self.store.rename_pinned(&old, &new);
        self.focus = Some(new);
        Ok(())
    }

    fn kill<C: Console>(&mut self, console: &mut C) -> PinResult<()> {
        let Some(name) = self.selected()? else {
            return Ok(());
        };
        if !console.confirm(&format!("Press Enter to kill session '{name}'"))? {
            return Ok(());
        }
        match self.mux.kill_session(&name) {
            Ok(()) => info!(session = %name, "killed session"),
            Err(e) => {
                warn!(session = %name, "kill failed: {e}");
                self.report(e.to_string());
            }
        }
        Ok(())
    }
}
