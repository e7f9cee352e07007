//! Message type exchanged between producer and consumer agents

use embedded_hal::digital::PinState;

/// A switch command travelling through the slot queue.
///
/// The wire encoding is one byte: `0` switches on, `1` switches off and
/// `2` is a no-op. Every other value decodes to [`Message::NoOp`] so an
/// out-of-range code is ignored rather than surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// Drive the assigned output active
    SwitchOn,
    /// Drive the assigned output inactive
    SwitchOff,
    /// Carry no action
    NoOp,
}

impl Message {
    /// Decode a raw message code, falling back to [`Message::NoOp`] for
    /// unknown values.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Message::SwitchOn,
            1 => Message::SwitchOff,
            _ => Message::NoOp,
        }
    }

    /// The output level this message asks for, if any.
    pub const fn pin_state(self) -> Option<PinState> {
        match self {
            Message::SwitchOn => Some(PinState::High),
            Message::SwitchOff => Some(PinState::Low),
            Message::NoOp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_decode() {
        assert_eq!(Message::from_raw(0), Message::SwitchOn);
        assert_eq!(Message::from_raw(1), Message::SwitchOff);
        assert_eq!(Message::from_raw(2), Message::NoOp);
    }

    #[test]
    fn unknown_codes_fall_back_to_no_op() {
        assert_eq!(Message::from_raw(3), Message::NoOp);
        assert_eq!(Message::from_raw(0x7f), Message::NoOp);
        assert_eq!(Message::from_raw(u8::MAX), Message::NoOp);
    }

    #[test]
    fn messages_map_to_output_levels() {
        assert_eq!(Message::SwitchOn.pin_state(), Some(PinState::High));
        assert_eq!(Message::SwitchOff.pin_state(), Some(PinState::Low));
        assert_eq!(Message::NoOp.pin_state(), None);
    }
}
