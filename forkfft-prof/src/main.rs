mod timer;

use clap::{App, Arg, ArgMatches};
use forkfft::{Configuration, ForkFft, Transform};
use num_complex::Complex;
use rand::{distributions::Standard, Rng};
use std::str::FromStr;
use thiserror::Error;
use timer::Timer;

/// Largest size compared against the quadratic DFT.
const MAX_CHECK_SIZE: usize = 4096;

#[derive(Error, Debug)]
enum ProfError {
    #[error("invalid value {value:?} for {name}")]
    Argument { name: &'static str, value: String },

    #[error(transparent)]
    Fft(#[from] forkfft::Error),

    #[error("size {0} is too large to check (limit {})", MAX_CHECK_SIZE)]
    TooLargeToCheck(usize),

    #[error("output differs from the DFT by {0:e}")]
    CheckFailed(f64),
}

fn parse<T: FromStr>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>, ProfError> {
    matches
        .value_of(name)
        .map(|value| {
            value.parse().map_err(|_| ProfError::Argument {
                name,
                value: value.to_string(),
            })
        })
        .transpose()
}

fn configuration(matches: &ArgMatches) -> Result<Configuration, ProfError> {
    let mut configuration = Configuration::from_env()?;
    if let Some(threads) = parse(matches, "threads")? {
        configuration = configuration.with_threads(Some(threads));
    }
    if let Some(cutoff) = parse(matches, "transform-cutoff")? {
        configuration = configuration.with_transform_cutoff(cutoff);
    }
    if let Some(cutoff) = parse(matches, "recombine-cutoff")? {
        configuration = configuration.with_recombine_cutoff(cutoff);
    }
    if let Some(cutoff) = parse(matches, "copy-cutoff")? {
        configuration = configuration.with_copy_cutoff(cutoff);
    }
    Ok(configuration)
}

fn dft(input: &[Complex<f64>], forward: bool) -> Vec<Complex<f64>> {
    let sign = if forward { -1. } else { 1. };
    (0..input.len())
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(n, x)| {
                    let f = sign * std::f64::consts::PI * ((2 * k * n) as f64)
                        / (input.len() as f64);
                    *x * Complex::new(f.cos(), f.sin())
                })
                .fold(Complex::default(), |sum, x| sum + x)
        })
        .collect()
}

fn check(
    input: &[Complex<f64>],
    output: &[Complex<f64>],
    transform: Transform,
) -> Result<(), ProfError> {
    if input.len() > MAX_CHECK_SIZE {
        return Err(ProfError::TooLargeToCheck(input.len()));
    }
    let scale = match transform {
        Transform::Ifft => 1. / input.len() as f64,
        _ => 1.,
    };
    let expected = dft(input, transform.is_forward());
    let error = output
        .iter()
        .zip(expected.iter())
        .map(|(x, y)| (*x - *y * scale).norm())
        .fold(0., f64::max);
    log::info!("maximum deviation from DFT: {:e}", error);
    if error > 1e-9 * input.len() as f64 {
        Err(ProfError::CheckFailed(error))
    } else {
        Ok(())
    }
}

fn run(matches: &ArgMatches) -> Result<(), ProfError> {
    let size = parse(matches, "size")?.unwrap_or(0);
    let iterations: usize = parse(matches, "iterations")?.unwrap_or(1);
    let transform = if matches.is_present("inverse") {
        Transform::Ifft
    } else {
        Transform::Fft
    };
    let fft = ForkFft::<f64>::with_configuration(size, configuration(matches)?)?;
    log::info!("{:?}", fft);

    let input = rand::thread_rng()
        .sample_iter(&Standard)
        .zip(rand::thread_rng().sample_iter(&Standard))
        .take(size)
        .map(|(x, y)| Complex::new(x, y))
        .collect::<Vec<_>>();
    let mut output = vec![Complex::default(); size];

    let mut timer = Timer::new();
    for _ in 0..iterations {
        timer.time(|| fft.transform(&input, &mut output, transform))?;
    }

    let elapsed = timer.elapsed();
    println!(
        "size {}: {} iterations in {:.6} s ({:.6} s per transform)",
        size,
        iterations,
        elapsed,
        elapsed / iterations.max(1) as f64
    );

    if matches.is_present("check") {
        check(&input, &output, transform)?;
        println!("output matches DFT");
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("forkfft-prof")
        .about("Times fork-join FFTs of random input")
        .arg(
            Arg::with_name("size")
                .help("Transform size, a power of two")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("iterations")
                .short("n")
                .long("iterations")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(Arg::with_name("threads").long("threads").takes_value(true))
        .arg(
            Arg::with_name("transform-cutoff")
                .long("transform-cutoff")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("recombine-cutoff")
                .long("recombine-cutoff")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("copy-cutoff")
                .long("copy-cutoff")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Compare the last output against a direct DFT"),
        )
        .arg(
            Arg::with_name("inverse")
                .long("inverse")
                .help("Time the inverse transform"),
        )
        .get_matches();

    if let Err(error) = run(&matches) {
        eprintln!("forkfft-prof: {}", error);
        std::process::exit(1);
    }
}
