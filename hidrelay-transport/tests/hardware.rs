//! Integration tests against a real relay board.
//!
//! These tests require a relay board to be connected and switch it on and off.
//! Run with: cargo test -p hidrelay-transport --test hardware -- --ignored --nocapture

use std::thread::sleep;
use std::time::Duration;

use hidrelay_transport::{
    build_report, HidapiTransport, RelayTransport, WireState, PRODUCT_ID, REPORT_SIZE, VENDOR_ID,
};

#[test]
#[ignore] // requires hardware
fn enumerate_open_write_close() {
    let mut transport = HidapiTransport::new();
    transport.init().expect("hid_init failed");

    let devices = transport
        .enumerate(VENDOR_ID, PRODUCT_ID)
        .expect("enumeration failed");
    assert!(
        !devices.is_empty(),
        "No relay board found, plug in a {VENDOR_ID:04x}:{PRODUCT_ID:04x} device"
    );

    for dev in &devices {
        println!("{:04x}:{:04x} {}", dev.vid(), dev.pid(), dev.path());
        assert_eq!((dev.vid(), dev.pid()), (VENDOR_ID, PRODUCT_ID));

        for state in [WireState::On, WireState::Off] {
            let mut handle = transport.open(dev.path()).expect("open failed");
            let written = transport
                .write(&mut handle, &build_report(state))
                .expect("write failed");
            transport.close(handle);
            assert!(written > 0 && written <= REPORT_SIZE);
            sleep(Duration::from_millis(500));
        }
    }

    transport.shutdown().expect("hid_exit failed");
}

#[test]
#[ignore] // requires hardware
fn enumerate_unknown_id_is_empty() {
    let mut transport = HidapiTransport::new();
    transport.init().expect("hid_init failed");

    let devices = transport.enumerate(0xFFFE, 0xFFFE).expect("enumeration failed");
    assert!(devices.is_empty());

    transport.shutdown().expect("hid_exit failed");
}
