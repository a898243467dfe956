use core::fmt;

use ufmt::{derive::uDebug, uDisplay, uWrite, Formatter};

// First configuration step that failed, later steps are not attempted
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    Init,
    SetChannel,
    SetThisAddress,
    SetRf,
    PowerUpRx,
}

impl StartupError {
    pub const fn message(self) -> &'static str {
        match self {
            StartupError::Init => "NRF24 init failed",
            StartupError::SetChannel => "setChannel failed",
            StartupError::SetThisAddress => "setThisAddress failed",
            StartupError::SetRf => "setRF failed",
            StartupError::PowerUpRx => "powerOnRx failed",
        }
    }
}

impl uDisplay for StartupError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.message())
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiveError {
    // Driver rejected the frame (bad CRC, length mismatch, FIFO race)
    Dropped,
}
