use crate::log::{
    constants::{MAX_LEVEL_COUNT, MAX_NAME_LEN},
    log_error::LogError,
    log_level::{Level, LevelFlag, LevelSet},
};

/// Append-only table of the severities a logger knows about.
///
/// The level at position `i` always carries flag `1 << i`, which keeps every
/// flag unique and caps the registry at 64 entries.
#[derive(Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: Vec::with_capacity(8),
        }
    }

    /// Registers a new level and returns its flag.
    ///
    /// # Errors
    ///
    /// * [`LogError::CapacityExceeded`] when 64 levels are already registered.
    /// * [`LogError::NullArgument`] when `name` is empty.
    /// * [`LogError::NameTooLong`] when `name` exceeds [`MAX_NAME_LEN`] bytes.
    ///
    /// The registry is left untouched on error.
    pub fn add_level(&mut self, name: &str, color_code: &str) -> Result<LevelFlag, LogError> {
        let flag = LevelFlag::from_index(self.levels.len()).ok_or(LogError::CapacityExceeded {
            what: "levels",
            max: MAX_LEVEL_COUNT,
        })?;
        if name.is_empty() {
            return Err(LogError::NullArgument("name"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(LogError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }

        debug_assert!(flag.is_single());
        self.levels.push(Level::new(name, color_code, flag));
        Ok(flag)
    }

    /// Looks a flag up in registration order; the first match wins.
    #[must_use]
    pub fn resolve(&self, flag: LevelFlag) -> Option<&Level> {
        if flag == LevelFlag::NONE {
            return None;
        }
        self.levels.iter().find(|level| level.flag == flag)
    }

    /// Case-insensitive lookup by level name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Level> {
        let name = name.trim();
        self.levels
            .iter()
            .find(|level| level.name.eq_ignore_ascii_case(name))
    }

    /// OR of every registered flag.
    #[must_use]
    pub fn all_levels(&self) -> LevelSet {
        self.levels
            .iter()
            .fold(LevelSet::EMPTY, |set, level| set | level.flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::constants::{BLUE, RED};

    #[test]
    fn flags_follow_registration_order() {
        let mut reg = LevelRegistry::new();
        let info = reg.add_level("INFO", BLUE).expect("first level");
        let error = reg.add_level("ERROR", RED).expect("second level");

        assert_eq!(info.bits(), 1);
        assert_eq!(error.bits(), 2);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.all_levels().bits(), 0b11);
    }

    #[test]
    fn resolve_returns_registered_data() {
        let mut reg = LevelRegistry::new();
        let flag = reg.add_level("NOTICE", "\x1b[1;35m").unwrap();

        let level = reg.resolve(flag).expect("registered flag resolves");
        assert_eq!(level.name, "NOTICE");
        assert_eq!(level.color_code, "\x1b[1;35m");
        assert_eq!(level.flag, flag);
    }

    #[test]
    fn resolve_misses_unknown_and_sentinel() {
        let mut reg = LevelRegistry::new();
        reg.add_level("INFO", BLUE).unwrap();

        assert!(reg.resolve(LevelFlag::NONE).is_none());
        assert!(reg.resolve(LevelFlag::from_bits(2)).is_none());
        assert!(reg.resolve(LevelFlag::from_bits(3)).is_none());
    }

    #[test]
    fn capacity_is_sixty_four() {
        let mut reg = LevelRegistry::new();
        for i in 0..MAX_LEVEL_COUNT {
            reg.add_level(&format!("L{i}"), "").expect("within capacity");
        }
        assert_eq!(reg.resolve(LevelFlag::from_bits(1 << 63)).unwrap().name, "L63");

        let err = reg.add_level("ONE_TOO_MANY", "").unwrap_err();
        assert_eq!(
            err,
            LogError::CapacityExceeded {
                what: "levels",
                max: MAX_LEVEL_COUNT
            }
        );
        assert_eq!(reg.len(), MAX_LEVEL_COUNT);
    }

    #[test]
    fn name_length_is_bounded() {
        let mut reg = LevelRegistry::new();
        let exact = "N".repeat(MAX_NAME_LEN);
        reg.add_level(&exact, "").expect("max length is accepted");

        let long = "N".repeat(MAX_NAME_LEN + 1);
        match reg.add_level(&long, "") {
            Err(LogError::NameTooLong { len, max }) => {
                assert_eq!(len, MAX_NAME_LEN + 1);
                assert_eq!(max, MAX_NAME_LEN);
            }
            other => panic!("expected NameTooLong, got: {:?}", other),
        }
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut reg = LevelRegistry::new();
        assert_eq!(reg.add_level("", RED), Err(LogError::NullArgument("name")));
        assert!(reg.is_empty());
    }

    #[test]
    fn find_by_name_ignores_case() {
        let mut reg = LevelRegistry::new();
        let flag = reg.add_level("Success", "").unwrap();
        assert_eq!(reg.find_by_name("SUCCESS").map(|l| l.flag), Some(flag));
        assert!(reg.find_by_name("FAILURE").is_none());
    }
}
