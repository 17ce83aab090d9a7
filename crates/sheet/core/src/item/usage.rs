//! Usage-dot resource track.

/// Consumable usage dots bounded by a per-item capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "UsageFields"))]
pub struct UsageTrack {
    used: u8,
    capacity: u8,
}

impl UsageTrack {
    /// Pip count given to user-authored items.
    pub const CUSTOM_CAPACITY: u8 = 3;

    pub fn new(used: u8, capacity: u8) -> Self {
        Self {
            used: used.min(capacity),
            capacity,
        }
    }

    pub fn with_capacity(capacity: u8) -> Self {
        Self::new(0, capacity)
    }

    pub fn used(&self) -> u8 {
        self.used
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn is_depleted(&self) -> bool {
        self.capacity > 0 && self.used == self.capacity
    }

    /// Clicking a filled pip drops usage to just below it; clicking an empty
    /// pip fills up through it.
    pub fn toggle(&mut self, pip_index: u8) {
        let next = if pip_index < self.used {
            pip_index
        } else {
            pip_index.saturating_add(1)
        };
        self.used = next.min(self.capacity);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UsageFields {
    #[serde(default)]
    used: u8,
    #[serde(default)]
    capacity: u8,
}

#[cfg(feature = "serde")]
impl From<UsageFields> for UsageTrack {
    fn from(fields: UsageFields) -> Self {
        UsageTrack::new(fields.used, fields.capacity)
    }
}
