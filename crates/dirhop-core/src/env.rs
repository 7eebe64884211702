//! Process environment captured once at startup.

use std::path::PathBuf;

/// The parts of the process environment that navigation depends on.
///
/// Built once (usually via [`Environment::from_process`]) and handed to the
/// directory context, so nothing in the core reads globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    start_dir: PathBuf,
    home: Option<PathBuf>,
    user_profile: Option<PathBuf>,
}

impl Environment {
    /// Creates an environment with no home variables set.
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            start_dir,
            home: None,
            user_profile: None,
        }
    }

    /// Captures `HOME` and `USERPROFILE` from the running process.
    pub fn from_process(start_dir: PathBuf) -> Self {
        Self::new(start_dir)
            .with_home(non_empty_var("HOME"))
            .with_user_profile(non_empty_var("USERPROFILE"))
    }

    pub fn with_home(self, home: Option<PathBuf>) -> Self {
        Self { home, ..self }
    }

    pub fn with_user_profile(self, user_profile: Option<PathBuf>) -> Self {
        Self {
            user_profile,
            ..self
        }
    }

    /// The directory the process started in.
    pub fn start_dir(&self) -> &PathBuf {
        &self.start_dir
    }

    /// Resolves the home directory: `HOME`, then `USERPROFILE`, then the
    /// start directory.
    pub fn home_dir(&self) -> PathBuf {
        self.home
            .as_ref()
            .or(self.user_profile.as_ref())
            .unwrap_or(&self.start_dir)
            .clone()
    }
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_prefers_home_variable() {
        let env = Environment::new(PathBuf::from("/start"))
            .with_home(Some(PathBuf::from("/home/me")))
            .with_user_profile(Some(PathBuf::from("C:/Users/me")));
        assert_eq!(env.home_dir(), PathBuf::from("/home/me"));
    }

    #[test]
    fn home_falls_back_to_user_profile() {
        let env = Environment::new(PathBuf::from("/start"))
            .with_user_profile(Some(PathBuf::from("/profile")));
        assert_eq!(env.home_dir(), PathBuf::from("/profile"));
    }

    #[test]
    fn home_falls_back_to_start_dir() {
        let env = Environment::new(PathBuf::from("/start"));
        assert_eq!(env.home_dir(), PathBuf::from("/start"));
        assert_eq!(env.start_dir(), &PathBuf::from("/start"));
    }
}
