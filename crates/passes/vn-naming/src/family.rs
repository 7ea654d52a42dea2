//! Naming families

/// Naming state for one normalized type
///
/// A family rotates through its candidate names and appends a group number
/// once every candidate has been used. The candidate list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFamily {
    counter: usize,
    skip_zero: bool,
    candidates: Vec<String>,
}

impl NameFamily {
    /// Creates a family; callers guarantee `candidates` is non-empty
    pub(crate) fn new(counter: usize, skip_zero: bool, candidates: Vec<String>) -> Self {
        Self {
            counter,
            skip_zero,
            candidates,
        }
    }

    /// Number of names issued so far, plus the seed offset
    #[must_use]
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Whether the first rotation is issued without a numeric suffix
    #[must_use]
    pub fn skip_zero(&self) -> bool {
        self.skip_zero
    }

    /// Base names this family cycles through
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Issues the next name and advances the counter
    ///
    /// Single-candidate families append the raw counter (`flag`, `flag1`,
    /// `flag2`). Multi-candidate families append the rotation group instead
    /// (`i`, `j`, `k`, `l`, `i1`, `j1`). With `skip_zero` set, the suffix is
    /// left off for the whole first rotation.
    pub fn next_name(&mut self) -> String {
        let id = self.counter;
        let name = match self.candidates.as_slice() {
            [single] => {
                if id == 0 && self.skip_zero {
                    single.clone()
                } else {
                    format!("{single}{id}")
                }
            }
            rotation => {
                let amount = rotation.len();
                let base = &rotation[id % amount];
                if id < amount && self.skip_zero {
                    base.clone()
                } else {
                    format!("{base}{}", id / amount)
                }
            }
        };
        self.counter += 1;
        name
    }
}
