//! Ctrl-C handling.
//!
//! The row loop blocks on network calls and sleeps, so the signal is awaited on a
//! separate thread. An interrupt ends the process at once with status 0; rows
//! processed so far are not saved.

use tracing::warn;

pub(super) fn install() {
    let spawned = std::thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(|| {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!("could not start signal runtime: {}", e);
                    return;
                }
            };
            match runtime.block_on(tokio::signal::ctrl_c()) {
                Ok(()) => {
                    println!("\n\nScript interrupted by user.");
                    std::process::exit(0);
                }
                Err(e) => warn!("could not listen for Ctrl-C: {}", e),
            }
        });

    if let Err(e) = spawned {
        warn!("could not spawn signal thread: {}", e);
    }
}
