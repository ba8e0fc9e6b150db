/// Parallel fallible map over fixed-size chunks of `$slice`: apply `$f` to each
/// chunk, collecting into Result<Vec> in chunk order. The first error wins.
macro_rules! par_try_map_chunks {
    ($slice:expr, $chunk:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::ParallelIterator;
            use rayon::slice::ParallelSlice;
            $slice.par_chunks($chunk).map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.chunks($chunk).map($f).collect()
        }
    }};
}
