//! Fuzz target: `TiltMonitor` edge detection
//!
//! Treats every input bit as one pin reading and verifies:
//! - No panics for any reading sequence
//! - Exactly one transition per change between consecutive readings
//! - Transitions alternate ON/OFF, starting with ON
//!
//! cargo fuzz run fuzz_tilt_monitor

#![no_main]

use libfuzzer_sys::fuzz_target;
use tiltpoll::app::monitor::{TiltMonitor, Transition};

fuzz_target!(|data: &[u8]| {
    let mut monitor = TiltMonitor::new();
    let mut prev = false;
    let mut expect = Transition::On;

    for byte in data {
        for bit in 0..8 {
            let level = byte & (1 << bit) != 0;
            match monitor.observe(level) {
                Some(t) => {
                    assert_ne!(level, prev, "transition without a level change");
                    assert_eq!(t, expect, "transitions must alternate");
                    expect = match t {
                        Transition::On => Transition::Off,
                        Transition::Off => Transition::On,
                    };
                }
                None => assert_eq!(level, prev, "level change without a transition"),
            }
            prev = level;
        }
    }

    assert_eq!(monitor.last_level(), prev);
});
