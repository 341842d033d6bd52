//! Terminal Sorting Visualizer
//!
//! Generates a random sequence, sorts it with the chosen algorithm and plays
//! the recorded trace back as an animated bar chart.
//!
//! Usage:
//!
//! ```text
//! cargo run --example visualize -- [algorithm] [size] [seed] [speed]
//! cargo run --example visualize -- merge 20 42 10
//! RUST_LOG=debug cargo run --example visualize -- insertion
//! ```
//!
//! Defaults: bubble sort, 20 values, clock seed, 5 steps per second.

#[cfg(feature = "std")]
use sortscope::prelude::*;
#[cfg(feature = "std")]
use std::{env, thread};

#[cfg(feature = "std")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let algorithm: Algorithm = match args.first() {
        Some(name) => name.parse()?,
        None => Algorithm::default(),
    };

    let mut sequence = SequenceBuilder::new();
    if let Some(size) = args.get(1) {
        sequence = sequence.length(size.parse()?);
    }
    if let Some(seed) = args.get(2) {
        sequence = sequence.seed(seed.parse()?);
    }
    let mut playback = PlaybackBuilder::new();
    if let Some(speed) = args.get(3) {
        playback = playback.speed(speed.parse()?);
    }

    let values: Vec<i32> = sequence.build()?.next_sequence()?;
    let playback = playback.build()?;

    println!("{}", "=".repeat(60));
    println!("{} ({})", algorithm, algorithm.complexity());
    println!("{}", algorithm.description());
    println!("{}", "=".repeat(60));
    println!("Input: {:?}", values);
    println!();

    let result = SortScope::new().algorithm(algorithm).build()?.run(&values);

    println!(
        "{} steps at {} steps/sec (about {:.1}s)",
        result.steps(),
        playback.speed(),
        playback.duration(result.steps()).as_secs_f64()
    );
    println!();

    for frame in playback.frames(&result) {
        // Clear the screen and move the cursor home.
        print!("\x1b[2J\x1b[H");
        println!("{}", frame.title());
        println!("Progress: {:>5.1}%", frame.progress() * 100.0);
        println!();
        print!("{}", frame.chart());

        if !frame.is_last() {
            thread::sleep(playback.frame_interval());
        }
    }

    println!();
    println!("{}", result);

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
