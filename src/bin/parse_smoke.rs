//! Smoke test for the circuit description parser.
//!
//! Parses a fixed sample document and prints the resulting document's
//! Debug representation. A parse failure propagates out of `main`,
//! reaching stderr with a non-zero exit status.

use circuitpad_core::{dsl, error::Result};

const SAMPLE: &str = "circuit: simple_rc\n\
                      vcc: 5V\n\
                      net: OUT\n\
                      resistor: name=R1 value=10k node1=VCC node2=OUT\n\
                      capacitor: name=C1 value=1uF node1=OUT node2=GND\n";

fn main() -> Result<()> {
    let doc = dsl::parse(SAMPLE)?;
    println!("{:?}", doc);
    Ok(())
}
