use glide_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Mouse buttons in the bit order of the DOM `MouseEvent.buttons` mask.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Set of pressed buttons.
///
/// The bit layout matches `MouseEvent.buttons`, so a DOM value converts
/// directly with [`from_bits`](Self::from_bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    /// True when `button` is pressed and nothing else is.
    pub fn is_only(&self, button: PointerButton) -> bool {
        self.0 == 1 << (button as u8)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer-move sample with consumption tracking.
///
/// A handler that takes ownership of the gesture calls [`consume`](Self::consume);
/// host glue maps that onto the platform's "prevent default" so the browser
/// does not start a text selection drag.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    /// Position in client (viewport) coordinates.
    pub position: Point,
    pub buttons: PointerButtons,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(position: Point, buttons: PointerButtons) -> Self {
        Self {
            position,
            buttons,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
