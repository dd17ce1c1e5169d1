//! Body scroll lock held while the mobile menu is open.
//!
//! The lock is a guard: acquiring it sets `overflow: hidden` on the target
//! and dropping it restores whatever value was there before. Whoever owns the
//! guard (the header, while mounted) is the only writer.

/// Something with an `overflow` style, normally `document.body`.
pub trait ScrollLockTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Scroll suppression that is released when dropped.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLock<T: ScrollLockTarget> {
    target: T,
    previous: String,
}

impl<T: ScrollLockTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }

    /// Overflow value that will be restored on release
    #[cfg(test)]
    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<T: ScrollLockTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{MenuEvent, MenuState};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
        writes: Rc<RefCell<usize>>,
    }

    impl ScrollLockTarget for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_lock_and_release() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");
        assert_eq!(lock.previous(), "");
        drop(lock);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_restores_previous_value() {
        let body = FakeBody::default();
        body.set_overflow("scroll");
        {
            let _lock = ScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "scroll");
    }

    /// Mirrors the header: the guard lives in an `Option` slot that follows
    /// the menu state, and unmounting clears the slot.
    fn drive(body: &FakeBody, events: &[MenuEvent]) -> Option<ScrollLock<FakeBody>> {
        let mut state = MenuState::Closed;
        let mut slot: Option<ScrollLock<FakeBody>> = None;
        for &event in events {
            state = state.next(event);
            if state.locks_scroll() {
                if slot.is_none() {
                    slot = Some(ScrollLock::acquire(body.clone()));
                }
            } else {
                slot = None;
            }
        }
        slot
    }

    #[test]
    fn test_toggle_open_then_closed_unlocks() {
        let body = FakeBody::default();
        let slot = drive(&body, &[MenuEvent::Toggle, MenuEvent::Toggle]);
        assert!(slot.is_none());
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_unmount_while_open_unlocks() {
        let body = FakeBody::default();
        let slot = drive(&body, &[MenuEvent::Toggle]);
        assert_eq!(body.overflow(), "hidden");
        drop(slot);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_link_and_overlay_paths_unlock() {
        for closing in [MenuEvent::LinkActivated, MenuEvent::OverlayClicked] {
            let body = FakeBody::default();
            let slot = drive(&body, &[MenuEvent::Toggle, closing]);
            assert!(slot.is_none());
            assert_eq!(body.overflow(), "");
        }
    }

    #[test]
    fn test_single_acquisition_while_open() {
        let body = FakeBody::default();
        let _slot = drive(&body, &[MenuEvent::Toggle, MenuEvent::Toggle, MenuEvent::Toggle]);
        // open, release, open again: three writes, never a stacked lock
        assert_eq!(*body.writes.borrow(), 3);
        assert_eq!(body.overflow(), "hidden");
    }
}
