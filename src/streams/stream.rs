use std::io::Error;

/// Pull-based source of `f32` samples.
///
/// Implementations may be bounded (a fixed vector, a generator with a sample
/// cap) or unbounded. Every sample produced by one stream shares the same
/// [`label`], which names the data set in reports.
///
/// [`label`]: SampleStream::label
pub trait SampleStream {
    /// Name of the data set this stream produces.
    fn label(&self) -> &str;

    /// Indicates whether the stream *may* produce more samples.
    ///
    /// If this returns `false`, a subsequent call to [`next_sample`] must
    /// return `None`.
    ///
    /// [`next_sample`]: SampleStream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the stream is exhausted.
    fn next_sample(&mut self) -> Option<f32>;

    /// Resets the stream to its initial state.
    ///
    /// Generators re-seed their RNG from the stored seed, so the same
    /// sequence is replayed.
    fn restart(&mut self) -> Result<(), Error>;
}

/// Drains `stream` into a vector. The stream must be bounded.
pub fn collect_samples(stream: &mut dyn SampleStream) -> Vec<f32> {
    let mut out = Vec::new();
    while stream.has_more_samples() {
        let Some(v) = stream.next_sample() else {
            break;
        };
        out.push(v);
    }
    out
}
