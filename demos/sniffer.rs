//! This example opens a packet capture on the given interface, and prints
//! out the parsed radiotap header and MPDU for the first 100 captured
//! packets.
//!
//! On some macOS systems you might need to first put the Wi-Fi interface
//! into monitor mode.

use std::env;

const DLT_IEEE802_11_RADIO: i32 = 127;

fn main() -> anyhow::Result<()> {
    // Use first argument interface if passed in, else default to "en0" or "wlan0"
    let device = if let Some(arg) = env::args().nth(1) {
        arg
    } else {
        if cfg!(target_os = "macos") {
            "en0"
        } else {
            "wlan0"
        }
        .to_string()
    };

    // Open packet capture and set data link to 802.11 radiotap
    let mut cap = pcap::Capture::from_device(&device[..])?
        .timeout(1)
        .rfmon(cfg!(target_os = "macos"))
        .open()?;
    cap.set_datalink(pcap::Linktype(DLT_IEEE802_11_RADIO))?;

    let mut count = 0;
    // Print out the first 100 frames
    while count < 100 {
        // Get a packet from the interface
        match cap.next() {
            Ok(packet) => {
                // Parse both headers of the capture!
                if let Ok(frame) = dot11::parse(&packet) {
                    println!(
                        "{:?} -> {:?} @ {:?} Mb/s {:?} dBm",
                        frame.addr2(),
                        frame.addr1(),
                        frame.rate(),
                        frame.signal_dbm(),
                    );
                    println!("{:?}\n", frame.mpdu);
                    count += 1;
                }
            }

            Err(pcap::Error::TimeoutExpired) => continue,

            Err(e) => {
                println!("Unexpected error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}
