use ufmt::derive::uDebug;

pub const CHANNEL: u8 = 76;

// NUL padded to the 5 byte address width. The transmitter sends from "RCTX\0"
pub const RX_ADDRESS: [u8; 5] = *b"RCRX\0";

pub const DATA_RATE: DataRate = DataRate::R250Kbps;
pub const TX_POWER: TransmitPower = TransmitPower::Pa0dBm;

pub const BAUD_RATE: u32 = 115_200;

// nRF24 max payload, also the receive buffer size
pub const PAYLOAD_SIZE: usize = 32;

pub const EMPTY_REPORT_INTERVAL: u32 = 100;

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    R250Kbps,
    R1Mbps,
    R2Mbps,
}

impl DataRate {
    pub const fn kbps(self) -> u16 {
        match self {
            DataRate::R250Kbps => 250,
            DataRate::R1Mbps => 1000,
            DataRate::R2Mbps => 2000,
        }
    }
}

// PA levels as the nRF24L01+ datasheet names them
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitPower {
    PaMin,
    PaLow,
    PaHigh,
    Pa0dBm,
}

impl TransmitPower {
    pub const fn dbm(self) -> i8 {
        match self {
            TransmitPower::PaMin => -18,
            TransmitPower::PaLow => -12,
            TransmitPower::PaHigh => -6,
            TransmitPower::Pa0dBm => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioConfig {
    pub channel: u8,
    pub address: [u8; 5],
    pub data_rate: DataRate,
    pub power: TransmitPower,
}

impl RadioConfig {
    pub const RECEIVER: RadioConfig = RadioConfig {
        channel: CHANNEL,
        address: RX_ADDRESS,
        data_rate: DATA_RATE,
        power: TX_POWER,
    };
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self::RECEIVER
    }
}
