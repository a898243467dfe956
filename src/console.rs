use core::hint::spin_loop;

use ignore_result::Ignore as _;
use ufmt::{uDisplay, uWrite, uwrite};

// Serial terminals expect CR LF
pub const LINE_END: &str = "\r\n";

pub trait SerialConsole: uWrite {
    fn begin(&mut self, baud: u32);

    // USB CDC is only usable once a host terminal opens the port
    fn host_connected(&mut self) -> bool {
        true
    }
}

pub fn open<C: SerialConsole + ?Sized>(console: &mut C, baud: u32) {
    console.begin(baud);
    while !console.host_connected() {
        spin_loop();
    }
}

pub fn println<C, T>(console: &mut C, line: &T)
where
    C: uWrite,
    T: uDisplay + ?Sized,
{
    uwrite!(console, "{}{}", line, LINE_END).ignore();
}
