use candle_core::Device;
use tracing::debug;

use super::error::ModelError;

/// Selects the compute device for inference.
///
/// Tries Metal first, then CUDA, depending on which cargo features are
/// enabled; a backend that is compiled in but cannot be initialized at
/// runtime logs a warning and falls through. CPU is the final fallback and
/// always succeeds.
pub fn select_device() -> Result<Device, ModelError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU acceleration");
            return Ok(device);
        }
        Err(e) => tracing::warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU acceleration");
            return Ok(device);
        }
        Err(e) => tracing::warn!(error = %e, "CUDA device unavailable"),
    }

    debug!("Using CPU device for inference");
    Ok(Device::Cpu)
}
