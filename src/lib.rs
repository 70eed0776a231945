//! This crate provides power-of-two fast Fourier transforms (FFT) computed with fork-join
//! parallelism.
//!
//! # Implementation
//! The transform is a recursive radix-2 decimation-in-time Cooley-Tukey FFT.  Each level
//! splits its input into the even-indexed and odd-indexed samples with [`StrideView`]s,
//! which alias the input rather than copying it, and transforms both halves as concurrent
//! [`rayon`] tasks.  The halves are then merged by [`recombine`], which itself bisects the
//! butterfly range into concurrent tasks.  Output is produced in natural order.
//!
//! Every fork stops at a sequential cutoff, set with [`Configuration`].
//!
//! ```
//! use forkfft::{transform, Complex};
//!
//! let input = vec![Complex::new(1.0f64, 0.0); 4];
//! let mut output = vec![Complex::default(); 4];
//! transform(&mut output, &input, 4).unwrap();
//! assert_eq!(output[0], Complex::new(4.0, 0.0));
//! ```
//!
//! [`rayon`]: https://docs.rs/rayon

mod config;
mod copy;
mod error;
mod fft;
mod float;
mod probe;
mod recombine;
mod stride;
mod twiddle;

pub use config::*;
pub use copy::*;
pub use error::*;
pub use fft::*;
pub use float::*;
pub use recombine::*;
pub use stride::*;
pub use twiddle::*;

pub use num_complex::Complex;
