//! Contiguous-chunk data parallelism across observation points.
//!
//! Every (point, tesseroid) pair is independent, so splitting work across
//! points is safe. Splitting a single point's tesseroid-accumulation loop
//! across threads is not: floating-point addition is not associative, and
//! doing so would make the result depend on `njobs`.

use rayon::prelude::*;

use crate::point::ObservationPoint;

/// Split `points` into `njobs` contiguous chunks, run `worker` on each
/// chunk in parallel, and concatenate the results back in chunk order.
///
/// Chunk boundaries depend only on `points.len()` and `njobs`, never on
/// thread scheduling, so the result is bit-for-bit identical for any
/// `njobs`.
pub fn run_chunked<T, F>(points: &[ObservationPoint], njobs: usize, worker: F) -> Vec<T>
where
    F: Fn(&[ObservationPoint]) -> Vec<T> + Sync,
    T: Send,
{
    if njobs <= 1 || points.len() <= 1 {
        return worker(points);
    }

    let njobs = njobs.min(points.len());
    let chunk_len = points.len().div_ceil(njobs);

    points
        .par_chunks(chunk_len)
        .map(|chunk| worker(chunk))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
