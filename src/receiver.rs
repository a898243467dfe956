use ignore_result::Ignore as _;
use ufmt::uwrite;

use crate::{
    config::{RadioConfig, BAUD_RATE, EMPTY_REPORT_INTERVAL, PAYLOAD_SIZE},
    console::{self, SerialConsole, LINE_END},
    driver::Nrf24,
    error::{ReceiveError, StartupError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reception {
    Packet(usize),
    // Carries the updated empty packet count
    Empty(u32),
    Dropped,
}

pub struct Receiver<R, C> {
    radio: R,
    console: C,
    config: RadioConfig,
    empty_packets: u32,
}

impl<R, C> Receiver<R, C>
where
    R: Nrf24,
    C: SerialConsole,
{
    pub fn new(radio: R, console: C) -> Self {
        Self::with_config(radio, console, RadioConfig::RECEIVER)
    }

    pub fn with_config(radio: R, console: C, config: RadioConfig) -> Self {
        Self {
            radio,
            console,
            config,
            empty_packets: 0,
        }
    }

    // A failure is already logged when this returns, `run` works either way
    pub fn start(&mut self) -> Result<(), StartupError> {
        console::open(&mut self.console, BAUD_RATE);
        self.configure()
    }

    pub fn configure(&mut self) -> Result<(), StartupError> {
        match self.configure_radio() {
            Ok(()) => {
                info!("radio configured on channel {}", self.config.channel);
                console::println(&mut self.console, "NRF24 Initialised");
                Ok(())
            }
            Err(err) => {
                warn!("radio startup failed: {}", err);
                console::println(&mut self.console, &err);
                Err(err)
            }
        }
    }

    fn configure_radio(&mut self) -> Result<(), StartupError> {
        let config = self.config;
        let radio = &mut self.radio;

        radio.init().map_err(|_| StartupError::Init)?;
        radio
            .set_channel(config.channel)
            .map_err(|_| StartupError::SetChannel)?;
        radio
            .set_this_address(&config.address)
            .map_err(|_| StartupError::SetThisAddress)?;
        radio
            .set_rf(config.data_rate, config.power)
            .map_err(|_| StartupError::SetRf)?;
        radio.power_up_rx().map_err(|_| StartupError::PowerUpRx)?;
        Ok(())
    }

    pub fn poll(&mut self) -> Reception {
        self.radio.wait_available();

        // Contents are never logged, only the length
        let mut buf = [0u8; PAYLOAD_SIZE];
        match self.receive(&mut buf) {
            Ok(0) => {
                self.empty_packets = self.empty_packets.wrapping_add(1);
                if self.empty_packets % EMPTY_REPORT_INTERVAL == 0 {
                    uwrite!(
                        self.console,
                        "{} empty packets{}",
                        self.empty_packets,
                        LINE_END
                    )
                    .ignore();
                }
                Reception::Empty(self.empty_packets)
            }
            Ok(len) => {
                uwrite!(self.console, "received packet {} bytes{}", len, LINE_END).ignore();
                Reception::Packet(len)
            }
            Err(_) => Reception::Dropped,
        }
    }

    fn receive(&mut self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<usize, ReceiveError> {
        let len = self.radio.recv(buf).map_err(|_| ReceiveError::Dropped)?;
        if len > PAYLOAD_SIZE {
            debug!("driver reported {} bytes", len);
            return Err(ReceiveError::Dropped);
        }
        trace!("received {} bytes", len);
        Ok(len)
    }

    pub fn run(mut self) -> ! {
        loop {
            self.poll();
        }
    }

    pub fn empty_packets(&self) -> u32 {
        self.empty_packets
    }

    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn release(self) -> (R, C) {
        (self.radio, self.console)
    }
}
