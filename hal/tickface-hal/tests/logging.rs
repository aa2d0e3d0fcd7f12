//! The logging macros must consume their arguments in every build

#![deny(unused_variables)]

use tickface_hal::{debug, error, info, trace, warn, StorageError};

fn report(result: Result<u8, StorageError>) -> u8 {
    match result {
        Ok(value) => {
            trace!("Read {}", value);
            value
        }
        Err(e) => {
            warn!("Read failed: {:?}", e);
            0
        }
    }
}

#[test]
fn test_log_arguments_are_used() {
    let phase = "running";
    debug!("Phase {}", phase);
    let count = 3;
    info!("{} tuples", count);
    let code = -1;
    error!("Unexpected code {}", code);

    assert_eq!(report(Ok(9)), 9);
    assert_eq!(report(Err(StorageError::NotFound)), 0);
}
