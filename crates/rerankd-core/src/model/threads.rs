use tracing::debug;

/// Worker threads for CPU inference. A resource cap, not a correctness
/// mechanism; not exposed through configuration.
pub const INFERENCE_THREADS: usize = 4;

/// Bounds the global compute pool used by the tensor and tokenizer backends.
///
/// Call once at startup, before the first forward pass. A pool that was
/// already initialized elsewhere (e.g. by a test harness) is left as-is.
pub fn init_inference_threads(num_threads: usize) {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => debug!(num_threads, "Bounded inference thread pool"),
        Err(e) => debug!(error = %e, "Compute thread pool already initialized"),
    }
}
