//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Caller events
    /// At least one byte is waiting on the transport
    InputAvailable,
    /// The line after the banner was read and thrown away
    BannerDrained,
    /// A login line was read
    LoginCaptured,
    /// A password line was read
    PasswordCaptured,

    // Engine events
    /// Attempt counter bumped and caught-status shown
    StatusShown,
    /// Rejection message sent
    RejectionSent,

    // Fault events
    /// The transport failed mid-attempt
    TransportFault,
}

impl Event {
    /// Check if this event was caused by data from the caller
    pub fn is_caller_event(&self) -> bool {
        matches!(
            self,
            Event::InputAvailable
                | Event::BannerDrained
                | Event::LoginCaptured
                | Event::PasswordCaptured
        )
    }

    /// Check if this event records a captured credential
    pub fn is_capture(&self) -> bool {
        matches!(self, Event::LoginCaptured | Event::PasswordCaptured)
    }

    /// Check if this event indicates a fault
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::TransportFault)
    }
}
