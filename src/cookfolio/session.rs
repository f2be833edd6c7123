//! UI-session state machine.
//!
//! Codifies which screen a session is on and which transitions are legal,
//! so UI front ends share one tested model instead of each keeping ad-hoc
//! booleans. Purely in-memory; never touches the store. Events that don't
//! apply to the current state are ignored, the way stray UI events are.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The recipe grid.
    Listing,
    /// The creation form is open.
    Adding,
    /// A recipe's detail view.
    Viewing(Uuid),
    /// The delete-confirmation prompt, over either Listing or Viewing.
    ConfirmingDelete(Uuid),
}

#[derive(Debug)]
pub struct Session {
    screen: Screen,
    // Where cancelling a delete confirmation returns to.
    resume: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Listing,
            resume: Screen::Listing,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Listing -> Adding.
    pub fn open_form(&mut self) {
        if self.screen == Screen::Listing {
            self.screen = Screen::Adding;
        }
    }

    /// Adding -> Listing (after the add has been performed by the caller).
    pub fn submit(&mut self) {
        if self.screen == Screen::Adding {
            self.screen = Screen::Listing;
        }
    }

    /// Adding -> Listing, nothing created.
    pub fn cancel(&mut self) {
        if self.screen == Screen::Adding {
            self.screen = Screen::Listing;
        }
    }

    /// Listing -> Viewing(id).
    pub fn select(&mut self, id: Uuid) {
        if self.screen == Screen::Listing {
            self.screen = Screen::Viewing(id);
        }
    }

    /// Viewing -> Listing.
    pub fn close(&mut self) {
        if matches!(self.screen, Screen::Viewing(_)) {
            self.screen = Screen::Listing;
        }
    }

    /// Listing or Viewing -> ConfirmingDelete(id), remembering where to
    /// return on cancel.
    pub fn request_delete(&mut self, id: Uuid) {
        match self.screen {
            Screen::Listing | Screen::Viewing(_) => {
                self.resume = self.screen;
                self.screen = Screen::ConfirmingDelete(id);
            }
            _ => {}
        }
    }

    /// ConfirmingDelete -> Listing. Returns the id to delete. Always lands
    /// on Listing: if the deleted recipe was being viewed, that view is
    /// exited along with the confirmation.
    pub fn confirm_delete(&mut self) -> Option<Uuid> {
        if let Screen::ConfirmingDelete(id) = self.screen {
            self.screen = Screen::Listing;
            self.resume = Screen::Listing;
            Some(id)
        } else {
            None
        }
    }

    /// ConfirmingDelete -> whatever was on screen before the prompt.
    pub fn cancel_delete(&mut self) {
        if matches!(self.screen, Screen::ConfirmingDelete(_)) {
            self.screen = self.resume;
        }
    }
}
