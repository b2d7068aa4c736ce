//! Capacity growth configuration.

/// Growth rule for dynamic arrays that append one element at a time.
///
/// When an append finds `len == capacity`, the new capacity is
/// `(capacity + 1) * 2`. The `+ 1` lets an empty array start at two slots.
/// Bulk operations (merge, insert of a whole array, resize, reserve) grow
/// to the exact size they need instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Capacity after one doubling step from `current`.
    ///
    /// Returns `None` if the result overflows `usize`.
    pub fn grown_capacity(current: usize) -> Option<usize> {
        current.checked_add(1)?.checked_mul(2)
    }
}

/// Configuration for character buffers.
///
/// A string's capacity (in units, terminator included) is always a power
/// of two no smaller than `min_capacity`. Small strings therefore share one
/// allocation size and rarely reallocate while being built up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringConfig {
    /// Smallest allocation a non-null string will make, in units.
    ///
    /// Default: 1024. Always a power of two.
    min_capacity: usize,
}

impl StringConfig {
    /// Default allocation floor in character units.
    pub const DEFAULT_MIN_CAPACITY: usize = 1024;

    /// Create a config with the default floor.
    pub const fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }

    /// Create a config with a custom floor.
    ///
    /// `min_capacity` is rounded up to the next power of two; zero becomes one.
    /// Values too large to round fall back to the largest power of two.
    pub fn with_min_capacity(min_capacity: usize) -> Self {
        let min_capacity = min_capacity
            .max(1)
            .checked_next_power_of_two()
            .unwrap_or(1 << (usize::BITS - 1));
        if min_capacity != Self::DEFAULT_MIN_CAPACITY {
            log::debug!("string config with min_capacity={min_capacity}");
        }
        Self { min_capacity }
    }

    /// The allocation floor in units.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity to allocate for a buffer that must hold `units` units.
    ///
    /// The smallest power of two `>= units`, but never below the floor.
    /// Returns `None` if no power of two in `usize` is large enough.
    pub fn capacity_for(&self, units: usize) -> Option<usize> {
        Some(units.checked_next_power_of_two()?.max(self.min_capacity))
    }
}

impl Default for StringConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_starts_at_two() {
        assert_eq!(GrowthPolicy::grown_capacity(0), Some(2));
        assert_eq!(GrowthPolicy::grown_capacity(2), Some(6));
        assert_eq!(GrowthPolicy::grown_capacity(6), Some(14));
    }

    #[test]
    fn growth_overflow_is_none() {
        assert_eq!(GrowthPolicy::grown_capacity(usize::MAX), None);
        assert_eq!(GrowthPolicy::grown_capacity(usize::MAX / 2), None);
    }

    #[test]
    fn default_floor_is_1024() {
        let config = StringConfig::default();
        assert_eq!(config.min_capacity(), 1024);
        assert_eq!(config.capacity_for(1), Some(1024));
        assert_eq!(config.capacity_for(1024), Some(1024));
        assert_eq!(config.capacity_for(1025), Some(2048));
    }

    #[test]
    fn custom_floor_rounds_to_power_of_two() {
        assert_eq!(StringConfig::with_min_capacity(0).min_capacity(), 1);
        assert_eq!(StringConfig::with_min_capacity(3).min_capacity(), 4);
        assert_eq!(StringConfig::with_min_capacity(16).min_capacity(), 16);
    }

    #[test]
    fn capacity_for_small_floor() {
        let config = StringConfig::with_min_capacity(4);
        assert_eq!(config.capacity_for(0), Some(4));
        assert_eq!(config.capacity_for(5), Some(8));
        assert_eq!(config.capacity_for(usize::MAX), None);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn capacity_is_power_of_two_at_least_request(
                floor in 1usize..4096,
                units in 0usize..1_000_000,
            ) {
                let config = StringConfig::with_min_capacity(floor);
                let cap = config.capacity_for(units).unwrap();
                prop_assert!(cap.is_power_of_two());
                prop_assert!(cap >= units);
                prop_assert!(cap >= config.min_capacity());
            }
        }
    }
}
