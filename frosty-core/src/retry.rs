use std::future::Future;

use crate::FrostyError;

/// Run `op` up to `max_attempts` times, retrying only errors classified
/// transient by [`FrostyError::is_retryable`]. Permanent errors pass through
/// on the attempt that produced them.
pub async fn with_retries<T, F, Fut>(max_attempts: usize, mut op: F) -> Result<T, FrostyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FrostyError>>,
{
    if max_attempts == 0 {
        return Err(FrostyError::MaxRetriesExceeded { max: 0 });
    }

    for attempt in 1..=max_attempts {
        match op().await {
            Ok(output) => return Ok(output),
            Err(error) => {
                if !error.is_retryable() {
                    return Err(error);
                }
                if attempt == max_attempts {
                    return Err(FrostyError::MaxRetriesExceeded { max: max_attempts });
                }
            }
        }
    }

    Err(FrostyError::MaxRetriesExceeded { max: max_attempts })
}
