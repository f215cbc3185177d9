//! Shared animated scalar

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A scalar written by a tween engine and read by anything that samples it.
///
/// Clones share the same storage, so one clock can drive any number of
/// interpolations. The value is stored as `f32` bits in an atomic.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    bits: Arc<AtomicU32>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(value.to_bits())),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    /// Whether two handles refer to the same clock
    pub fn same_as(&self, other: &AnimatedValue) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let clock = AnimatedValue::new(0.0);
        let reader = clock.clone();

        clock.set(1.25);
        assert_eq!(reader.get(), 1.25);
        assert!(clock.same_as(&reader));
        assert!(!clock.same_as(&AnimatedValue::new(1.25)));
    }
}
