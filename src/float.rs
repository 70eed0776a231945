use num_complex::Complex;
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing fast Fourier transforms.
pub trait FftFloat:
    Float + FloatConst + FromPrimitive + NumAssign + Default + Send + Sync + 'static
{
}
impl<T> FftFloat for T where
    T: Float + FloatConst + FromPrimitive + NumAssign + Default + Send + Sync + 'static
{
}

/// Complex addition, `x + y`.
#[inline(always)]
pub fn add<T: FftFloat>(x: Complex<T>, y: Complex<T>) -> Complex<T> {
    Complex::new(x.re + y.re, x.im + y.im)
}

/// Complex subtraction, `x - y`.
#[inline(always)]
pub fn sub<T: FftFloat>(x: Complex<T>, y: Complex<T>) -> Complex<T> {
    Complex::new(x.re - y.re, x.im - y.im)
}

/// Complex multiplication, `x * y`.
#[inline(always)]
pub fn mul<T: FftFloat>(x: Complex<T>, y: Complex<T>) -> Complex<T> {
    Complex::new(x.re * y.re - x.im * y.im, x.re * y.im + x.im * y.re)
}

/// Evaluates `e^(2πi * sup / sub)`, the `sub`-th root of unity raised to `sup`.
///
/// `sub` must be nonzero.
#[inline]
pub fn root<T: FftFloat>(sub: usize, sup: isize) -> Complex<T> {
    debug_assert!(sub != 0, "root of unity requires a nonzero order");
    let theta = sup as f64 * 2. * core::f64::consts::PI / sub as f64;
    Complex::new(
        T::from_f64(theta.cos()).unwrap(),
        T::from_f64(theta.sin()).unwrap(),
    )
}
