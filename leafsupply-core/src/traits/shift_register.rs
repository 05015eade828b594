//! Shift register port

/// Serial-in, parallel-out output register
pub trait ShiftRegister {
    /// Replace the whole visible output state with `byte`
    ///
    /// There is no partial-bit update; callers keep a mirror of what was
    /// last written.
    fn shift_out(&mut self, byte: u8);
}
