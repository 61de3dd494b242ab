// Rust guideline compliant 2026-08-29

//! Enigma M3 emulator entry point.
//!
//! Runs an interactive session on stdin: each line is encrypted with the
//! current machine settings, and the rotors' final positions are fed back
//! as the next line's start positions, so the session steps continuously
//! even though every request is stateless.
//!
//! # Usage
//!
//! ```text
//! # Plugboard pairs as the first argument, e.g. "BY EW"
//! RUST_LOG=info cargo run --bin enigma -- "BY EW"
//!
//! # Decrypt by restarting with the same settings and typing the ciphertext
//! RUST_LOG=debug cargo run --bin enigma
//! ```

mod wire;

use anyhow::Context as _;
use domain::Emulator as _;
use engine::EnigmaM3;
use tokio::io::{AsyncBufReadExt as _, BufReader};
use wire::{RotorSelection, WireRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let plugboard_mappings = std::env::args().nth(1).unwrap_or_default();

    // Session settings: rotors I-II-III at AAA, ring 1, UKW-B. Only the
    // start positions change between lines.
    let mut left = RotorSelection { rotor_type: 1, start_position: 1, ring_setting: 1 };
    let mut middle = RotorSelection { rotor_type: 2, start_position: 1, ring_setting: 1 };
    let mut right = RotorSelection { rotor_type: 3, start_position: 1, ring_setting: 1 };

    let emulator = EnigmaM3;
    eprintln!("enigma: type a message and press ENTER (CTRL+C to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("main.shutdown: ctrl_c received");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if line.is_empty() {
                    continue;
                }

                let request_id = uuid::Uuid::new_v4();
                let request = WireRequest {
                    left_rotor: left,
                    middle_rotor: middle,
                    right_rotor: right,
                    reflector_type: 1,
                    plugboard_mappings: plugboard_mappings.clone(),
                    message: line,
                };

                let request = match request.into_request() {
                    Ok(request) => request,
                    Err(e) => {
                        eprintln!("configuration rejected: {e}");
                        continue;
                    }
                };
                match emulator.encrypt(&request) {
                    Ok(response) => {
                        println!("{}", response.ciphertext);
                        tracing::info!(
                            "main.encrypted: request={request_id} chars={} positions={:?}",
                            response.ciphertext.len(),
                            response.final_positions
                        );
                        // Resume the session where this line left off.
                        left.start_position = u32::from(response.final_positions.left);
                        middle.start_position = u32::from(response.final_positions.middle);
                        right.start_position = u32::from(response.final_positions.right);
                    }
                    Err(e) => {
                        tracing::info!("main.rejected: request={request_id} error={e}");
                        eprintln!("error: {e}");
                    }
                }
            }
        }
    }

    Ok(())
}
