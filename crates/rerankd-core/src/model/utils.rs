use std::io;
use std::path::Path;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Loads a tokenizer configured for batched pair scoring.
///
/// Cross-encoder models have a fixed maximum sequence length, so inputs
/// exceeding `max_len` are truncated. Padding to the longest sequence in each
/// batch keeps every row of a batch the same width for the tensor reshape.
pub fn load_tokenizer(tokenizer_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    let padding = PaddingParams {
        strategy: PaddingStrategy::BatchLongest,
        ..Default::default()
    };

    tokenizer.with_padding(Some(padding));

    Ok(tokenizer)
}
