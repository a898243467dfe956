#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use heapless::Vec as Payload;
use rc_receiver::{
    config::{DataRate, TransmitPower, PAYLOAD_SIZE},
    Nrf24, SerialConsole, StartupError,
};
use ufmt::uWrite;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init,
    SetChannel(u8),
    SetThisAddress(Vec<u8>),
    SetRf(DataRate, TransmitPower),
    PowerUpRx,
    WaitAvailable,
    Recv { capacity: usize },
}

pub enum Frame {
    Data(Payload<u8, PAYLOAD_SIZE>),
    Corrupt,
    // Reports a length without writing the buffer
    Claimed(usize),
}

#[derive(Debug)]
pub struct FakeError;

// Radio that records every call and replays scripted frames.
#[derive(Default)]
pub struct FakeRadio {
    pub calls: Vec<Call>,
    fail_at: Option<StartupError>,
    frames: VecDeque<Frame>,
}

impl FakeRadio {
    pub fn new() -> Self {
        Self::default()
    }

    // Make the given configuration step fail.
    pub fn failing_at(step: StartupError) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }

    pub fn push_packet(&mut self, data: &[u8]) {
        let payload = Payload::from_slice(data).expect("payload too long");
        self.frames.push_back(Frame::Data(payload));
    }

    pub fn push_empty(&mut self) {
        self.frames.push_back(Frame::Data(Payload::new()));
    }

    pub fn push_corrupt(&mut self) {
        self.frames.push_back(Frame::Corrupt);
    }

    pub fn push_claimed(&mut self, len: usize) {
        self.frames.push_back(Frame::Claimed(len));
    }

    pub fn pending(&self) -> usize {
        self.frames.len()
    }

    fn step(&mut self, call: Call, step: StartupError) -> Result<(), FakeError> {
        self.calls.push(call);
        if self.fail_at == Some(step) {
            Err(FakeError)
        } else {
            Ok(())
        }
    }
}

impl Nrf24 for FakeRadio {
    type Error = FakeError;

    fn init(&mut self) -> Result<(), FakeError> {
        self.step(Call::Init, StartupError::Init)
    }

    fn set_channel(&mut self, channel: u8) -> Result<(), FakeError> {
        self.step(Call::SetChannel(channel), StartupError::SetChannel)
    }

    fn set_this_address(&mut self, address: &[u8]) -> Result<(), FakeError> {
        self.step(
            Call::SetThisAddress(address.to_vec()),
            StartupError::SetThisAddress,
        )
    }

    fn set_rf(&mut self, data_rate: DataRate, power: TransmitPower) -> Result<(), FakeError> {
        self.step(Call::SetRf(data_rate, power), StartupError::SetRf)
    }

    fn power_up_rx(&mut self) -> Result<(), FakeError> {
        self.step(Call::PowerUpRx, StartupError::PowerUpRx)
    }

    fn wait_available(&mut self) {
        self.calls.push(Call::WaitAvailable);
        assert!(!self.frames.is_empty(), "waiting on a radio with no frames");
    }

    fn recv(&mut self, buf: &mut [u8; PAYLOAD_SIZE]) -> Result<usize, FakeError> {
        self.calls.push(Call::Recv {
            capacity: buf.len(),
        });
        match self.frames.pop_front() {
            Some(Frame::Data(payload)) => {
                buf[..payload.len()].copy_from_slice(&payload);
                Ok(payload.len())
            }
            Some(Frame::Claimed(len)) => Ok(len),
            Some(Frame::Corrupt) | None => Err(FakeError),
        }
    }
}

// Console that keeps everything written to it.
#[derive(Default)]
pub struct CaptureConsole {
    pub output: String,
    pub baud: Option<u32>,
    // Polls left before the host terminal shows up
    pub attach_after: u32,
    pub polls: u32,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attaching_after(polls: u32) -> Self {
        Self {
            attach_after: polls,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output.split_terminator("\r\n").collect()
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }
}

impl uWrite for CaptureConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.output.push_str(s);
        Ok(())
    }
}

impl SerialConsole for CaptureConsole {
    fn begin(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn host_connected(&mut self) -> bool {
        self.polls += 1;
        self.polls > self.attach_after
    }
}
