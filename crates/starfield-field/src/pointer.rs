//! Pointer position shared between the input layer and the animator.
//!
//! Pointer moves arrive from window events; the animator reads the latest
//! value once per tick. `PointerCell` is a single slot with
//! last-write-wins semantics. Both coordinates are packed into one
//! `AtomicU64` so a reader never sees `x` from one event and `y` from
//! another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Pointer position in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upward; both lie in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn pack(self) -> u64 {
        ((self.x.to_bits() as u64) << 32) | self.y.to_bits() as u64
    }

    fn unpack(bits: u64) -> Self {
        Self {
            x: f32::from_bits((bits >> 32) as u32),
            y: f32::from_bits(bits as u32),
        }
    }
}

/// Convert a window pixel position to normalized pointer coordinates.
///
/// Pixel `y` grows downward, so it is flipped. Positions outside the
/// window (reported while dragging) are clamped to the edge, and a
/// degenerate window size yields the center.
pub fn normalize_pointer(px: f64, py: f64, width: u32, height: u32) -> PointerState {
    if width == 0 || height == 0 {
        return PointerState::CENTER;
    }
    let x = (px / width as f64) * 2.0 - 1.0;
    let y = -(py / height as f64) * 2.0 + 1.0;
    PointerState::new(x.clamp(-1.0, 1.0) as f32, y.clamp(-1.0, 1.0) as f32)
}

/// Single-slot pointer cell. Cloning shares the slot.
#[derive(Debug, Clone)]
pub struct PointerCell {
    slot: Arc<AtomicU64>,
}

impl PointerCell {
    pub fn new(initial: PointerState) -> Self {
        Self {
            slot: Arc::new(AtomicU64::new(initial.pack())),
        }
    }

    pub fn store(&self, state: PointerState) {
        self.slot.store(state.pack(), Ordering::Relaxed);
    }

    pub fn load(&self) -> PointerState {
        PointerState::unpack(self.slot.load(Ordering::Relaxed))
    }
}

impl Default for PointerCell {
    fn default() -> Self {
        Self::new(PointerState::CENTER)
    }
}
