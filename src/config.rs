use crate::error::Error;

const TRANSFORM_CUTOFF_VAR: &str = "FORKFFT_TRANSFORM_CUTOFF";
const RECOMBINE_CUTOFF_VAR: &str = "FORKFFT_RECOMBINE_CUTOFF";
const COPY_CUTOFF_VAR: &str = "FORKFFT_COPY_CUTOFF";
const THREADS_VAR: &str = "FORKFFT_THREADS";

/// Tuning parameters for constructing FFTs.
///
/// Each cutoff is the problem size at or below which the corresponding step stops
/// forking tasks and runs sequentially.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Transform size at or below which both half transforms run on the current task.
    pub transform_cutoff: usize,
    /// Number of butterflies per sequential recombination task.
    pub recombine_cutoff: usize,
    /// Number of elements per sequential copy or scaling task.
    pub copy_cutoff: usize,
    /// Worker count of a dedicated thread pool, or `None` to use the global pool.
    pub threads: Option<usize>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            transform_cutoff: 64,
            recombine_cutoff: 1024,
            copy_cutoff: 4096,
            threads: None,
        }
    }
}

impl Configuration {
    /// A configuration that never forks.
    pub fn sequential() -> Self {
        Self {
            transform_cutoff: usize::MAX,
            recombine_cutoff: usize::MAX,
            copy_cutoff: usize::MAX,
            threads: None,
        }
    }

    pub fn with_transform_cutoff(self, transform_cutoff: usize) -> Self {
        Self {
            transform_cutoff,
            ..self
        }
    }

    pub fn with_recombine_cutoff(self, recombine_cutoff: usize) -> Self {
        Self {
            recombine_cutoff,
            ..self
        }
    }

    pub fn with_copy_cutoff(self, copy_cutoff: usize) -> Self {
        Self {
            copy_cutoff,
            ..self
        }
    }

    pub fn with_threads(self, threads: Option<usize>) -> Self {
        Self { threads, ..self }
    }

    /// Checks that every cutoff and the thread count are nonzero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.transform_cutoff == 0 {
            return Err(Error::InvalidCutoff { name: "transform" });
        }
        if self.recombine_cutoff == 0 {
            return Err(Error::InvalidCutoff { name: "recombine" });
        }
        if self.copy_cutoff == 0 {
            return Err(Error::InvalidCutoff { name: "copy" });
        }
        if self.threads == Some(0) {
            return Err(Error::InvalidThreadCount);
        }
        Ok(())
    }

    /// Reads overrides of the default configuration from `FORKFFT_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let parse = |variable: &'static str| -> Result<Option<usize>, Error> {
            match lookup(variable) {
                None => Ok(None),
                Some(value) => match value.trim().parse() {
                    Ok(parsed) => Ok(Some(parsed)),
                    Err(_) => {
                        log::warn!("rejecting {}={:?}", variable, value);
                        Err(Error::InvalidEnvironment { variable, value })
                    }
                },
            }
        };

        let mut configuration = Self::default();
        if let Some(cutoff) = parse(TRANSFORM_CUTOFF_VAR)? {
            configuration.transform_cutoff = cutoff;
        }
        if let Some(cutoff) = parse(RECOMBINE_CUTOFF_VAR)? {
            configuration.recombine_cutoff = cutoff;
        }
        if let Some(cutoff) = parse(COPY_CUTOFF_VAR)? {
            configuration.copy_cutoff = cutoff;
        }
        if let Some(threads) = parse(THREADS_VAR)? {
            configuration.threads = Some(threads);
        }
        configuration.validate()?;
        Ok(configuration)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Configuration::default().validate().is_ok());
        assert!(Configuration::sequential().validate().is_ok());
    }

    #[test]
    fn rejects_zero() {
        let config = Configuration::default().with_recombine_cutoff(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidCutoff { name: "recombine" })
        ));
        let config = Configuration::default().with_threads(Some(0));
        assert!(matches!(config.validate(), Err(Error::InvalidThreadCount)));
    }

    #[test]
    fn environment_overrides() {
        let config = Configuration::from_lookup(lookup(&[
            (RECOMBINE_CUTOFF_VAR, "32"),
            (THREADS_VAR, " 3 "),
        ]))
        .unwrap();
        assert_eq!(
            config,
            Configuration::default()
                .with_recombine_cutoff(32)
                .with_threads(Some(3))
        );
    }

    #[test]
    fn environment_rejects_garbage() {
        let result = Configuration::from_lookup(lookup(&[(COPY_CUTOFF_VAR, "lots")]));
        match result {
            Err(Error::InvalidEnvironment { variable, value }) => {
                assert_eq!(variable, COPY_CUTOFF_VAR);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected {:?}", other),
        }
        let result = Configuration::from_lookup(lookup(&[(TRANSFORM_CUTOFF_VAR, "0")]));
        assert!(matches!(
            result,
            Err(Error::InvalidCutoff { name: "transform" })
        ));
    }
}
