use forkfft::{Configuration, ForkFft, Transform};
use num_complex::Complex;
use num_traits::{Float, FromPrimitive, NumAssign};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;

fn dft<T: FromPrimitive + Float + NumAssign + Default + Clone>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    assert_eq!(input.len(), output.len());
    for k in 0..input.len() {
        output[k] = Complex::default();
        for n in 0..input.len() {
            let f = std::f64::consts::PI * ((2 * k * n) as f64) / (input.len() as f64);
            output[k] += input[n]
                * Complex::new(
                    T::from_f64(f.cos()).unwrap(),
                    T::from_f64(-f.sin()).unwrap(),
                );
        }
    }
}

fn idft<T: FromPrimitive + Float + NumAssign + Default + Clone>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    assert_eq!(input.len(), output.len());
    for k in 0..input.len() {
        output[k] = Complex::default();
        for n in 0..input.len() {
            let f = std::f64::consts::PI * ((2 * k * n) as f64) / (input.len() as f64);
            output[k] += input[n]
                * Complex::new(
                    T::from_f64(f.cos() / (input.len() as f64)).unwrap(),
                    T::from_f64(f.sin() / (input.len() as f64)).unwrap(),
                );
        }
    }
}

fn near_f32(actual: &[Complex<f32>], expected: &[Complex<f32>]) {
    assert_eq!(actual.len(), expected.len());
    let tolerance = 1e-3;
    for (actual, expected) in actual.iter().zip(expected.iter()) {
        assert!(
            float_cmp::approx_eq!(
                f32,
                actual.re,
                expected.re,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ) && float_cmp::approx_eq!(
                f32,
                actual.im,
                expected.im,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ),
            "{} != {}",
            actual,
            expected
        );
    }
}

fn near_f64(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
    assert_eq!(actual.len(), expected.len());
    let tolerance = 1e-9;
    for (actual, expected) in actual.iter().zip(expected.iter()) {
        assert!(
            float_cmp::approx_eq!(
                f64,
                actual.re,
                expected.re,
                float_cmp::F64Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ) && float_cmp::approx_eq!(
                f64,
                actual.im,
                expected.im,
                float_cmp::F64Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ),
            "{} != {}",
            actual,
            expected
        );
    }
}

macro_rules! generate_test {
    {
        $type:ty, $name:ident, $max_size:expr, $comparison:ident, $forward:expr
    } => {
        #[test]
        fn $name() {
            const MAX_SIZE: usize = $max_size;
            let stddev = if $forward {
                1.0
            } else {
                MAX_SIZE as $type
            };
            let distribution = Normal::new(0.0, stddev).unwrap();
            let input = StdRng::seed_from_u64(0xdeadbeef)
                .sample_iter(&distribution)
                .zip(StdRng::seed_from_u64(0xcafef00d).sample_iter(&distribution))
                .take(MAX_SIZE)
                .map(|(x, y)| Complex::new(x, y))
                .collect::<Vec<_>>();
            let mut fft_output = vec![Complex::default(); MAX_SIZE];
            let mut dft_output = vec![Complex::default(); MAX_SIZE];
            let transform = if $forward {
                Transform::Fft
            } else {
                Transform::Ifft
            };
            let reference = if $forward {
                dft::<$type>
            } else {
                idft::<$type>
            };
            let configuration = Configuration::default()
                .with_transform_cutoff(4)
                .with_recombine_cutoff(16);
            let mut size = 1;
            while size <= MAX_SIZE {
                let fft = ForkFft::<$type>::with_configuration(size, configuration).unwrap();
                fft.transform(&input[0..size], &mut fft_output[0..size], transform)
                    .unwrap();
                reference(&input[0..size], &mut dft_output[0..size]);
                $comparison(&fft_output[0..size], &dft_output[0..size]);
                size *= 2;
            }
        }
    }
}

generate_test! { f32, integrity_forward_f32, 256, near_f32, true }
generate_test! { f32, integrity_inverse_f32, 256, near_f32, false }
generate_test! { f64, integrity_forward_f64, 1024, near_f64, true }
generate_test! { f64, integrity_inverse_f64, 1024, near_f64, false }
