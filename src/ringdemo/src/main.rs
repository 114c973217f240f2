use anyhow::Result;
use clap::{Arg, Command};
use ringbound::RingBuffer;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("ringdemo")
        .version("0.1")
        .about("Exercises bounded ring buffers over several element types")
        .subcommand(
            Command::new("run").about("Run the demo sequence").arg(
                Arg::new("capacity")
                    .long("capacity")
                    .default_value("5")
                    .help("Capacity of the integer sample buffer"),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            let capacity: usize = sub_matches
                .get_one::<String>("capacity")
                .unwrap()
                .parse()?;
            run_demo(capacity)?;
        }
        _ => {
            println!("Use --help for usage.");
        }
    }
    Ok(())
}

fn run_demo(capacity: usize) -> Result<()> {
    info!(capacity, "starting ring buffer demo");

    let mut int_buffer = RingBuffer::new(capacity)?;
    for value in 1..=capacity as i64 {
        int_buffer.push(value);
    }
    println!("Average: {}", int_buffer.average()?);

    // Two more pushes slide the window forward, evicting the two oldest.
    int_buffer.push(capacity as i64 + 1);
    int_buffer.push(capacity as i64 + 2);
    println!(
        "After eviction: front={} len={} fill={:.0}%",
        int_buffer.front()?,
        int_buffer.len(),
        int_buffer.fill_percentage()
    );

    let mut double_buffer = RingBuffer::new(4)?;
    double_buffer.push(1.5);
    double_buffer.push(2.5);
    double_buffer.push(3.5);
    println!("Average: {}", double_buffer.average()?);

    double_buffer.resize(3)?;
    info!(
        len = double_buffer.len(),
        capacity = double_buffer.capacity(),
        "resized float buffer"
    );
    println!(
        "After resize: front={} len={}",
        double_buffer.front()?,
        double_buffer.len()
    );

    let mut string_buffer = RingBuffer::new(3)?;
    string_buffer.push("Hello".to_string());
    string_buffer.push("World".to_string());
    string_buffer.push("!".to_string());
    println!("Size: {}", string_buffer.len());

    Ok(())
}
