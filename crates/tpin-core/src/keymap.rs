//! Key dispatch for the interactive menu.
//!
//! Keys that act the same everywhere are resolved first; the rest depend
//! on the cursor's [`Region`]. Anything unmatched is [`Action::Ignore`].

use crate::console::Key;
use crate::cursor::Region;

/// Number of pinned slots reachable from the keyboard.
const QUICK_SLOTS: usize = 9;

/// Shifted digits on a US layout, `!` for slot 1 through `(` for slot 9.
const REPOSITION_KEYS: [char; QUICK_SLOTS] = ['!', '@', '#', '$', '%', '^', '&', '*', '('];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ctrl-C: leave with a failure status.
    Interrupt,
    /// Esc: leave quietly.
    Quit,
    /// Switch to the selected session and leave.
    Select,
    /// Switch to a pinned slot (1-based) and leave.
    QuickSwitch(usize),
    Move(isize),
    SwapNext,
    SwapPrev,
    Pin,
    Unpin,
    /// Move the selected pinned session to a slot (0-based).
    Reposition(usize),
    NewSession,
    Rename,
    Kill,
    Ignore,
}

pub fn dispatch(region: Region, key: Key) -> Action {
    match (region, key) {
        (_, Key::CtrlC) => Action::Interrupt,
        (_, Key::Esc) => Action::Quit,
        (_, Key::Enter) => Action::Select,
        (_, Key::Char(c @ '1'..='9')) => Action::QuickSwitch(c as usize - '0' as usize),
        (_, Key::Char('j')) | (_, Key::Down) => Action::Move(1),
        (_, Key::Char('k')) | (_, Key::Up) => Action::Move(-1),
        (_, Key::Char('J')) => Action::SwapNext,
        (_, Key::Char('K')) => Action::SwapPrev,
        (_, Key::Char('n')) => Action::NewSession,
        (_, Key::Char('r')) => Action::Rename,
        (_, Key::Char('d')) => Action::Kill,
        (Region::Unpinned, Key::Char('p')) => Action::Pin,
        (Region::Pinned, Key::Char('P')) => Action::Unpin,
        (Region::Pinned, Key::Char(c)) => REPOSITION_KEYS
            .iter()
            .position(|&k| k == c)
            .map_or(Action::Ignore, Action::Reposition),
        _ => Action::Ignore,
    }
}

/// One-line key reference shown under the session list.
pub fn help_line(region: Region) -> &'static str {
    match region {
        Region::Pinned => {
            "j/k move  J/K swap  !..( place  P unpin  1-9 jump  n new  r rename  d kill  enter switch  esc quit"
        }
        Region::Unpinned => {
            "j/k move  p pin  1-9 jump  n new  r rename  d kill  enter switch  esc quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_one_based_slots() {
        assert_eq!(dispatch(Region::Unpinned, Key::Char('1')), Action::QuickSwitch(1));
        assert_eq!(dispatch(Region::Pinned, Key::Char('9')), Action::QuickSwitch(9));
        assert_eq!(dispatch(Region::Pinned, Key::Char('0')), Action::Ignore);
    }

    #[test]
    fn pin_only_in_unpinned_region() {
        assert_eq!(dispatch(Region::Unpinned, Key::Char('p')), Action::Pin);
        assert_eq!(dispatch(Region::Pinned, Key::Char('p')), Action::Ignore);
    }

    #[test]
    fn unpin_only_in_pinned_region() {
        assert_eq!(dispatch(Region::Pinned, Key::Char('P')), Action::Unpin);
        assert_eq!(dispatch(Region::Unpinned, Key::Char('P')), Action::Ignore);
    }

    #[test]
    fn shifted_digits_reposition_in_pinned_region() {
        assert_eq!(dispatch(Region::Pinned, Key::Char('!')), Action::Reposition(0));
        assert_eq!(dispatch(Region::Pinned, Key::Char('$')), Action::Reposition(3));
        assert_eq!(dispatch(Region::Pinned, Key::Char('(')), Action::Reposition(8));
        assert_eq!(dispatch(Region::Unpinned, Key::Char('!')), Action::Ignore);
    }

    #[test]
    fn region_independent_keys() {
        for region in [Region::Pinned, Region::Unpinned] {
            assert_eq!(dispatch(region, Key::CtrlC), Action::Interrupt);
            assert_eq!(dispatch(region, Key::Esc), Action::Quit);
            assert_eq!(dispatch(region, Key::Enter), Action::Select);
            assert_eq!(dispatch(region, Key::Char('j')), Action::Move(1));
            assert_eq!(dispatch(region, Key::Up), Action::Move(-1));
            assert_eq!(dispatch(region, Key::Char('J')), Action::SwapNext);
            assert_eq!(dispatch(region, Key::Char('K')), Action::SwapPrev);
            assert_eq!(dispatch(region, Key::Char('n')), Action::NewSession);
            assert_eq!(dispatch(region, Key::Char('r')), Action::Rename);
            assert_eq!(dispatch(region, Key::Char('d')), Action::Kill);
            assert_eq!(dispatch(region, Key::Other), Action::Ignore);
            assert_eq!(dispatch(region, Key::Char('z')), Action::Ignore);
        }
    }
}
