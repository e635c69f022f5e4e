//! The three pipeline stages.
//!
//! Each stage is a single-threaded, single-pass stream consumer: it reads
//! records sequentially, owns its accumulation tables for the lifetime of
//! one run, and shares nothing with other stage instances. Grouping records
//! by key between stages is the runner's job, not the stages'.
//!
//! Stages are generic over [`std::io::BufRead`] input and
//! [`std::io::Write`] output, so tests can drive them with in-memory
//! buffers instead of process pipes.

pub mod combine;
pub mod rank;
pub mod tokenize;
