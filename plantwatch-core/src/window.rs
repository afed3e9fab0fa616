//! Fixed-Capacity Rolling Window for Channel Statistics
//!
//! ## Overview
//!
//! Each sensor channel keeps its most recent samples in a [`Window`]: a
//! circular buffer of `f32` with on-demand statistics (mean, population
//! standard deviation, max, min). Storage is an inline `heapless::Vec`
//! sized by [`MAX_WINDOW_CAPACITY`], so windows never touch the heap; the
//! capacity actually used is chosen at construction and never changes.
//!
//! ## Write Order
//!
//! A push first advances the write position, then stores. The very first
//! sample therefore lands in slot 1, not slot 0:
//!
//! ```text
//! Window with capacity 3, after pushing 1.0, 2.0, 3.0, 4.0:
//!
//!   push 1.0   [0.0, 1.0, 0.0]   write_pos = 1
//!   push 2.0   [0.0, 1.0, 2.0]   write_pos = 2
//!   push 3.0   [3.0, 1.0, 2.0]   write_pos = 0
//!   push 4.0   [3.0, 4.0, 2.0]   write_pos = 1
//! ```
//!
//! ## Warm-Up Bias
//!
//! Slots start at `0.0` and statistics always cover every slot. Until the
//! window has been written `capacity` times the unwritten zeros pull the
//! mean toward zero, widen the deviation and clamp min/max at zero. This is
//! what the telemetry consumers have always seen, so it is kept.
//!
//! ## Invalid Samples
//!
//! `NaN` is stored as-is. While a `NaN` sits in any slot every statistic of
//! that window is `NaN`; it clears once the slot is overwritten
//! `capacity` pushes later.
//!
//! ## Usage Example
//!
//! ```rust
//! use plantwatch_core::window::Window;
//!
//! let mut window = Window::new(3).unwrap();
//! window.push(1.0);
//! window.push(2.0);
//! window.push(3.0);
//!
//! assert_eq!(window.mean(), 2.0);
//! assert_eq!(window.max(), 3.0);
//! assert_eq!(window.min(), 1.0);
//! ```

use heapless::Vec;

use crate::constants::buffers::MAX_WINDOW_CAPACITY;
use crate::errors::{CoreError, CoreResult};

/// Fixed-capacity circular buffer of samples for one channel
///
/// ## Internal Invariants
///
/// - `slots.len() == capacity` for the whole lifetime of the window
/// - `write_pos < capacity`
/// - every slot holds a value (zero until first overwritten)
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Sample storage, always exactly `capacity` long
    slots: Vec<f32, MAX_WINDOW_CAPACITY>,

    /// Slot written by the most recent push
    write_pos: usize,
}

impl Window {
    /// Creates a window of `capacity` zero-filled slots
    ///
    /// Fails with [`CoreError::InvalidCapacity`] when `capacity` is zero or
    /// larger than [`MAX_WINDOW_CAPACITY`].
    pub fn new(capacity: usize) -> CoreResult<Self> {
        if capacity == 0 || capacity > MAX_WINDOW_CAPACITY {
            return Err(CoreError::InvalidCapacity {
                requested: capacity,
                max: MAX_WINDOW_CAPACITY,
            });
        }

        let mut slots = Vec::new();
        slots
            .resize(capacity, 0.0)
            .map_err(|_| CoreError::InvalidCapacity {
                requested: capacity,
                max: MAX_WINDOW_CAPACITY,
            })?;

        Ok(Self {
            slots,
            write_pos: 0,
        })
    }

    /// Stores a sample, overwriting the oldest one
    ///
    /// The write position advances (wrapping at capacity) before the store.
    pub fn push(&mut self, value: f32) {
        self.write_pos = (self.write_pos + 1) % self.slots.len();
        self.slots[self.write_pos] = value;
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot written by the most recent push (0 before any push)
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// Raw slot contents in physical order
    pub fn as_slice(&self) -> &[f32] {
        &self.slots
    }

    /// Arithmetic mean over all slots
    pub fn mean(&self) -> f32 {
        let sum: f32 = self.slots.iter().sum();
        sum / self.slots.len() as f32
    }

    /// Population standard deviation over all slots
    ///
    /// Divides by the capacity, not `capacity - 1`.
    pub fn std_dev(&self) -> f32 {
        let mean = self.mean();
        let sum_sq: f32 = self
            .slots
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum();

        libm::sqrtf(sum_sq / self.slots.len() as f32)
    }

    /// Largest slot value, `NaN` if any slot is `NaN`
    pub fn max(&self) -> f32 {
        self.fold_extreme(|candidate, current| candidate > current)
    }

    /// Smallest slot value, `NaN` if any slot is `NaN`
    pub fn min(&self) -> f32 {
        self.fold_extreme(|candidate, current| candidate < current)
    }

    // `f32::max`/`f32::min` skip NaN; a NaN slot must win here instead.
    fn fold_extreme(&self, replaces: impl Fn(f32, f32) -> bool) -> f32 {
        self.slots[1..].iter().fold(self.slots[0], |current, &candidate| {
            if current.is_nan() {
                current
            } else if candidate.is_nan() || replaces(candidate, current) {
                candidate
            } else {
                current
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[f32]) -> Window {
        let mut window = Window::new(capacity).unwrap();
        for &v in values {
            window.push(v);
        }
        window
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(
            Window::new(0),
            Err(CoreError::InvalidCapacity { requested: 0, max: MAX_WINDOW_CAPACITY })
        );
    }

    #[test]
    fn rejects_capacity_beyond_storage() {
        assert!(Window::new(MAX_WINDOW_CAPACITY).is_ok());
        assert!(matches!(
            Window::new(MAX_WINDOW_CAPACITY + 1),
            Err(CoreError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn starts_zero_filled() {
        let window = Window::new(5).unwrap();
        assert_eq!(window.capacity(), 5);
        assert_eq!(window.write_position(), 0);
        assert!(window.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(window.mean(), 0.0);
        assert_eq!(window.std_dev(), 0.0);
    }

    #[test]
    fn push_advances_before_storing() {
        let window = filled(3, &[7.0]);
        assert_eq!(window.write_position(), 1);
        assert_eq!(window.as_slice(), &[0.0, 7.0, 0.0]);
    }

    #[test]
    fn warm_up_bias_includes_zero_slots() {
        let window = filled(4, &[8.0]);
        assert_eq!(window.mean(), 2.0);
        assert_eq!(window.max(), 8.0);
        assert_eq!(window.min(), 0.0);
    }

    #[test]
    fn full_window_statistics() {
        let window = filled(3, &[1.0, 2.0, 3.0]);
        assert_eq!(window.mean(), 2.0);
        // sqrt(2/3)
        assert!((window.std_dev() - 0.816_496_6).abs() < 1e-6);
        assert_eq!(window.max(), 3.0);
        assert_eq!(window.min(), 1.0);
    }

    #[test]
    fn wraps_and_overwrites_oldest() {
        let window = filled(3, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(window.write_position(), 1);
        assert_eq!(window.as_slice(), &[3.0, 4.0, 2.0]);
        assert!((window.mean() - 3.0).abs() < 1e-6);
        assert_eq!(window.min(), 2.0);
        assert_eq!(window.max(), 4.0);
    }

    #[test]
    fn capacity_one_always_holds_latest() {
        let window = filled(1, &[5.0, -2.5]);
        assert_eq!(window.as_slice(), &[-2.5]);
        assert_eq!(window.mean(), -2.5);
        assert_eq!(window.std_dev(), 0.0);
    }

    #[test]
    fn nan_poisons_until_evicted() {
        let mut window = filled(3, &[1.0, f32::NAN, 3.0]);
        assert!(window.mean().is_nan());
        assert!(window.std_dev().is_nan());
        assert!(window.max().is_nan());
        assert!(window.min().is_nan());

        // NaN sits in slot 2; the second push from here overwrites it
        window.push(4.0);
        assert!(window.mean().is_nan());
        window.push(5.0);
        assert_eq!(window.as_slice(), &[3.0, 4.0, 5.0]);
        assert_eq!(window.mean(), 4.0);
        assert_eq!(window.max(), 5.0);
        assert_eq!(window.min(), 3.0);
    }

    #[test]
    fn nan_in_first_slot_propagates_to_extremes() {
        let window = filled(2, &[1.0, f32::NAN]);
        assert!(window.as_slice()[0].is_nan());
        assert!(window.max().is_nan());
        assert!(window.min().is_nan());
    }

    #[test]
    fn accessors_do_not_mutate() {
        let window = filled(4, &[3.0, 9.0, 1.0]);
        let first = (window.mean(), window.std_dev(), window.max(), window.min());
        let second = (window.mean(), window.std_dev(), window.max(), window.min());
        assert_eq!(first, second);
        assert_eq!(window.as_slice(), &[0.0, 3.0, 9.0, 1.0]);
    }
}
