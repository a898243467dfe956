use crate::config::{DataRate, TransmitPower, PAYLOAD_SIZE};

pub trait Nrf24 {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error>;

    // Slice length is the address width
    fn set_this_address(&mut self, address: &[u8]) -> Result<(), Self::Error>;

    fn set_rf(&mut self, data_rate: DataRate, power: TransmitPower) -> Result<(), Self::Error>;

    fn power_up_rx(&mut self) -> Result<(), Self::Error>;

    // Blocks until the RX FIFO has a packet, no timeout
    fn wait_available(&mut self);

    fn recv(&mut self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<usize, Self::Error>;
}
