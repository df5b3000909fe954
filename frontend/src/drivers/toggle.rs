//! At-most-one-open state for accordions and the mobile menu.

/// Keyed single-open toggle. Opening an item closes whichever was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleOpen<K> {
    open: Option<K>,
}

impl<K> Default for SingleOpen<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> SingleOpen<K> {
    /// Toggles `key`. Returns whether it is open afterwards.
    pub fn activate(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    #[cfg(test)]
    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }

    #[cfg(test)]
    pub fn close(&mut self) {
        self.open = None;
    }
}

/// The mobile menu: the same contract with a single unnamed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Follows a navigation link with `jump`, then closes the menu whether
    /// or not the jump found its target. Returns what `jump` returned.
    pub fn follow<F>(&mut self, jump: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        let found = jump();
        self.close();
        found
    }
}
