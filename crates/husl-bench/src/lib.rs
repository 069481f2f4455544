//! Benchmark-only crate; see `benches/husl_bench.rs`.
