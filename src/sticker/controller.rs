use tracing::debug;

use crate::sticker::model::Sticker;

/// One abstract input event delivered to a sticker's controller.
///
/// Positions are normalized container coordinates; pinch events carry the
/// current inter-touch distance in container pixels. The controller is
/// independent of the underlying input-delivery mechanism.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Primary pointer pressed on the sticker.
    PointerDown,
    /// Pointer moved while pressed.
    PointerMove {
        /// Normalized horizontal container position.
        x: f64,
        /// Normalized vertical container position.
        y: f64,
    },
    /// Primary pointer released.
    PointerUp,
    /// Touch contact count changed on the container.
    TouchBegin {
        /// Simultaneous contacts currently down.
        contacts: usize,
        /// Inter-touch distance when two contacts are down.
        distance: f64,
    },
    /// Two-touch move sample with the current inter-touch distance.
    TouchMove {
        /// Current inter-touch distance.
        distance: f64,
    },
    /// A contact lifted; `contacts` is the count still down.
    TouchEnd {
        /// Contacts remaining on the container.
        contacts: usize,
    },
    /// Discrete rotate control activated.
    RotateStep,
    /// Double activation directly on the sticker body.
    DoubleTap,
    /// Explicit delete control activated.
    Remove,
}

/// What an applied event did to the sticker record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEffect {
    /// No record change.
    None,
    /// Position, scale or rotation was committed to the record.
    Updated,
    /// The placement must be removed from the sticker list (terminal).
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Pinching { baseline: f64 },
}

/// Per-placement gesture state machine: `idle`, `dragging`, `pinching`.
///
/// Every applied change is committed to the owning [`Sticker`] record so the
/// next compositor run reflects it; the controller never triggers
/// regeneration itself.
#[derive(Clone, Copy, Debug)]
pub struct StickerController {
    phase: Phase,
}

impl Default for StickerController {
    fn default() -> Self {
        Self::new()
    }
}

impl StickerController {
    /// A controller in the idle state.
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Whether a pinch is in progress.
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, Phase::Pinching { .. })
    }

    /// Apply one input event to `sticker`, advancing the state machine.
    pub fn apply(&mut self, sticker: &mut Sticker, event: GestureEvent) -> GestureEffect {
        match event {
            GestureEvent::PointerDown => {
                if self.phase == Phase::Idle {
                    self.phase = Phase::Dragging;
                }
                GestureEffect::None
            }
            GestureEvent::PointerMove { x, y } => {
                if self.phase != Phase::Dragging {
                    return GestureEffect::None;
                }
                sticker.move_to(x, y);
                GestureEffect::Updated
            }
            GestureEvent::PointerUp => {
                if self.phase == Phase::Dragging {
                    self.phase = Phase::Idle;
                }
                GestureEffect::None
            }
            GestureEvent::TouchBegin { contacts, distance } => {
                // Exactly two contacts start a pinch, whether idle or mid-drag.
                if contacts == 2 && distance > 0.0 {
                    self.phase = Phase::Pinching { baseline: distance };
                }
                GestureEffect::None
            }
            GestureEvent::TouchMove { distance } => {
                let Phase::Pinching { baseline } = self.phase else {
                    return GestureEffect::None;
                };
                if distance <= 0.0 || baseline <= 0.0 {
                    return GestureEffect::None;
                }
                // Ratchet scaling: the baseline resets after every applied
                // sample, so each event contributes an incremental factor.
                sticker.scale_by(distance / baseline);
                self.phase = Phase::Pinching { baseline: distance };
                GestureEffect::Updated
            }
            GestureEvent::TouchEnd { contacts } => {
                if contacts < 2 && self.is_pinching() {
                    self.phase = Phase::Idle;
                }
                GestureEffect::None
            }
            GestureEvent::RotateStep => {
                sticker.rotate_step();
                GestureEffect::Updated
            }
            GestureEvent::DoubleTap | GestureEvent::Remove => {
                debug!(id = %sticker.id, "sticker removed");
                GestureEffect::Removed
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sticker/controller.rs"]
mod tests;
