use crate::config::Configuration;
use crate::copy::copy;
use crate::error::Error;
use crate::float::FftFloat;
use crate::probe::WriteProbe;
use crate::recombine::recombine_probed;
use crate::stride::StrideView;
use crate::twiddle::Twiddles;
use num_complex::Complex;
use rayon::prelude::*;

/// Specifies a type of transform to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Fast Fourier transform
    Fft,
    /// Inverse fast Fourier transform
    Ifft,
    /// Unscaled IFFT (conventionally the IFFT is scaled by `1 / N`)
    UnscaledIfft,
    /// Square-root scaled FFT (a unitary transform)
    SqrtScaledFft,
    /// Square-root scaled IFFT (a unitary transform)
    SqrtScaledIfft,
}

impl Transform {
    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Fft | Self::SqrtScaledFft => true,
            Self::Ifft | Self::UnscaledIfft | Self::SqrtScaledIfft => false,
        }
    }

    /// Returns the inverse transform, or `None` for `UnscaledIfft`.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        match self {
            Self::Fft => Some(Self::Ifft),
            Self::Ifft => Some(Self::Fft),
            Self::SqrtScaledFft => Some(Self::SqrtScaledIfft),
            Self::SqrtScaledIfft => Some(Self::SqrtScaledFft),
            Self::UnscaledIfft => None,
        }
    }
}

/// The recursive decimation-in-time driver.
struct Kernel<'a, T, P> {
    twiddles: &'a Twiddles<T>,
    configuration: &'a Configuration,
    probe: &'a P,
}

impl<'a, T, P> Kernel<'a, T, P>
where
    T: FftFloat,
    P: WriteProbe,
{
    /// Writes the `output.len()`-point DFT of `input` to `output`.
    ///
    /// `offset` is the position of `output` within the top-level output buffer.
    fn run(&self, output: &mut [Complex<T>], offset: usize, input: StrideView<'_, Complex<T>>) {
        let size = output.len();
        if size == 1 {
            output[0] = input[0];
            self.probe.record(offset, 1, 0);
            return;
        }

        let half = size / 2;
        let (even, odd) = input.split();
        {
            let (even_output, odd_output) = output.split_at_mut(half);
            if size > self.configuration.transform_cutoff {
                rayon::join(
                    || self.run(even_output, offset, even),
                    || self.run(odd_output, offset + half, odd),
                );
            } else {
                self.run(even_output, offset, even);
                self.run(odd_output, offset + half, odd);
            }
        }

        recombine_probed(
            output,
            offset,
            self.twiddles,
            0,
            half,
            self.configuration.recombine_cutoff,
            self.probe,
        );
    }
}

/// A power-of-two FFT computed with fork-join parallelism.
pub struct ForkFft<T> {
    size: usize,
    configuration: Configuration,
    twiddles: (Twiddles<T>, Twiddles<T>),
    pool: Option<rayon::ThreadPool>,
}

impl<T> core::fmt::Debug for ForkFft<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        f.debug_struct("ForkFft")
            .field("size", &self.size)
            .field("configuration", &self.configuration)
            .finish()
    }
}

impl<T: FftFloat> ForkFft<T> {
    /// Constructs an FFT with the default configuration.
    pub fn new(size: usize) -> Result<Self, Error> {
        Self::with_configuration(size, Configuration::default())
    }

    /// Constructs an FFT.
    ///
    /// Fails if `size` is not a power of two or the configuration is invalid.
    pub fn with_configuration(size: usize, configuration: Configuration) -> Result<Self, Error> {
        if !size.is_power_of_two() {
            return Err(Error::NotPowerOfTwo { size });
        }
        configuration.validate()?;

        let pool = match configuration.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("forkfft-{}", index))
                    .build()?,
            ),
            None => None,
        };
        log::debug!(
            "planned size {} FFT with {:?} ({} workers)",
            size,
            configuration,
            pool.as_ref()
                .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
        );

        Ok(Self {
            size,
            configuration,
            twiddles: (Twiddles::new(size, true), Twiddles::new(size, false)),
            pool,
        })
    }

    /// The size of the FFT.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Apply an FFT or IFFT out-of-place.  The input is not modified.
    pub fn transform(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        transform: Transform,
    ) -> Result<(), Error> {
        self.check_len("input", input.len())?;
        self.check_len("output", output.len())?;
        log::trace!("size {} {:?} out-of-place", self.size, transform);
        self.install(|| self.run(StrideView::from_raw(input), output, transform, &()));
        Ok(())
    }

    /// Apply an FFT or IFFT to the first `size` elements of a strided view.
    pub fn transform_strided(
        &self,
        input: StrideView<'_, Complex<T>>,
        output: &mut [Complex<T>],
        transform: Transform,
    ) -> Result<(), Error> {
        if input.capacity() < self.size {
            return Err(Error::SizeMismatch {
                buffer: "input",
                expected: self.size,
                actual: input.capacity(),
            });
        }
        self.check_len("output", output.len())?;
        log::trace!(
            "size {} {:?} from stride {} view",
            self.size,
            transform,
            input.stride()
        );
        self.install(|| self.run(input, output, transform, &()));
        Ok(())
    }

    /// Apply an FFT or IFFT in-place.
    ///
    /// The buffer is first copied to scratch storage, which the kernel then reads.
    pub fn transform_in_place(
        &self,
        buffer: &mut [Complex<T>],
        transform: Transform,
    ) -> Result<(), Error> {
        self.check_len("input", buffer.len())?;
        log::trace!("size {} {:?} in-place", self.size, transform);
        let mut work = vec![Complex::default(); self.size];
        self.install(|| {
            copy(&mut work, buffer, self.configuration.copy_cutoff);
            self.run(StrideView::from_raw(&work), buffer, transform, &());
        });
        Ok(())
    }

    /// Apply an FFT out-of-place.
    pub fn fft(&self, input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), Error> {
        self.transform(input, output, Transform::Fft)
    }

    /// Apply an IFFT out-of-place.
    pub fn ifft(&self, input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), Error> {
        self.transform(input, output, Transform::Ifft)
    }

    /// Apply an FFT in-place.
    pub fn fft_in_place(&self, buffer: &mut [Complex<T>]) -> Result<(), Error> {
        self.transform_in_place(buffer, Transform::Fft)
    }

    /// Apply an IFFT in-place.
    pub fn ifft_in_place(&self, buffer: &mut [Complex<T>]) -> Result<(), Error> {
        self.transform_in_place(buffer, Transform::Ifft)
    }

    fn check_len(&self, buffer: &'static str, actual: usize) -> Result<(), Error> {
        if actual == self.size {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                buffer,
                expected: self.size,
                actual,
            })
        }
    }

    fn install<F>(&self, f: F)
    where
        F: FnOnce() + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    fn run<P: WriteProbe>(
        &self,
        input: StrideView<'_, Complex<T>>,
        output: &mut [Complex<T>],
        transform: Transform,
        probe: &P,
    ) {
        // Select the twiddles for this operation
        let twiddles = if transform.is_forward() {
            &self.twiddles.0
        } else {
            &self.twiddles.1
        };

        Kernel {
            twiddles,
            configuration: &self.configuration,
            probe,
        }
        .run(output, 0, input);

        if let Some(scale) = match transform {
            Transform::Fft | Transform::UnscaledIfft => None,
            Transform::Ifft => Some(T::one() / T::from_usize(self.size).unwrap()),
            Transform::SqrtScaledFft | Transform::SqrtScaledIfft => {
                Some(T::one() / T::from_usize(self.size).unwrap().sqrt())
            }
        } {
            output
                .par_chunks_mut(self.configuration.copy_cutoff)
                .for_each(|chunk| {
                    for x in chunk {
                        *x = *x * scale;
                    }
                });
        }
    }
}

/// Writes the forward DFT of `input[..n]` to `output[..n]`.
///
/// Fails if `n` is not a power of two or either buffer is shorter than `n`.
pub fn transform<T: FftFloat>(
    output: &mut [Complex<T>],
    input: &[Complex<T>],
    n: usize,
) -> Result<(), Error> {
    transform_with(output, input, n, Transform::Fft, Configuration::default())
}

/// Like [`transform`], with a choice of transform and configuration.
pub fn transform_with<T: FftFloat>(
    output: &mut [Complex<T>],
    input: &[Complex<T>],
    n: usize,
    transform: Transform,
    configuration: Configuration,
) -> Result<(), Error> {
    let fft = ForkFft::with_configuration(n, configuration)?;
    if input.len() < n {
        return Err(Error::SizeMismatch {
            buffer: "input",
            expected: n,
            actual: input.len(),
        });
    }
    if output.len() < n {
        return Err(Error::SizeMismatch {
            buffer: "output",
            expected: n,
            actual: output.len(),
        });
    }
    fft.transform(&input[..n], &mut output[..n], transform)
}
