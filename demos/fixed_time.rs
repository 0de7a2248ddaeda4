//! Fixed-time demo - the pure chain without a terminal.
//!
//! Feeds literal times through the pipeline into a MemorySink and prints
//! every recorded frame, then shows the intermediate records for one
//! conversion.
//!
//! Run with: cargo run --example fixed_time

use chrono::NaiveTime;
use tick_clock::{pad_fields, render_line, serialize, to_civilian, MemorySink, Sink, Template};

fn main() {
    let template = Template::default();

    println!("=== tick-clock fixed-time demo ===\n");

    let mut sink = MemorySink::new();
    for (h, m, s) in [(0, 5, 9), (9, 59, 59), (12, 30, 45), (13, 0, 0), (23, 1, 2)] {
        let now = NaiveTime::from_hms_opt(h, m, s).expect("valid literal time");
        let line = render_line(now, &template);
        sink.display(&line).expect("memory sink cannot fail");
    }

    println!("Recorded frames:");
    for frame in sink.frames() {
        println!("  {frame}");
    }

    // Intermediate records for one conversion
    let record = serialize(NaiveTime::from_hms_opt(13, 0, 0).expect("valid literal time"));
    let civil = to_civilian(record);
    let padded = pad_fields(civil);

    println!("\nStages for 13:00:00:");
    println!("  record:   {record:?}");
    println!("  civilian: {civil:?}");
    println!("  padded:   {padded:?}");
    println!("  line:     {:?}", template.render(&padded));

    println!("\n=== Demo Complete ===");
}
