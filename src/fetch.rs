//! Lifecycle of a single remote read.
//!
//! A page issues its independent reads together and renders once every
//! state has settled. States never retry on their own.

use std::fmt::Display;
use std::future::Future;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// Marks the read as in flight, dropping any previous outcome.
    pub fn start(&mut self) {
        *self = FetchState::Loading;
    }

    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = Self::from_result(result);
    }

    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Success(value),
            Err(err) => FetchState::Error(err.to_string()),
        }
    }

    /// Runs `fut` to completion and returns the settled state.
    pub async fn load<F, E>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let result = fut.await;
        if let Err(err) = &result {
            tracing::debug!("Fetch failed: {}", err);
        }
        Self::from_result(result)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Success(value) => FetchState::Success(f(value)),
            FetchState::Error(message) => FetchState::Error(message),
        }
    }

    /// Turns the settled state back into a result for `?` callers.
    /// Unsettled states are reported as errors.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            FetchState::Success(value) => Ok(value),
            FetchState::Error(message) => Err(anyhow::anyhow!(message)),
            FetchState::Idle | FetchState::Loading => {
                Err(anyhow::anyhow!("Fetch has not completed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_walks_the_lifecycle() {
        let mut state: FetchState<u32> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
        assert!(!state.is_settled());

        state.start();
        assert!(state.is_loading());

        state.resolve::<String>(Ok(3));
        assert_eq!(state.data(), Some(&3));
        assert_eq!(state.clone().map(|n| n * 2), FetchState::Success(6));

        state.start();
        state.resolve::<String>(Err("Error: 500".into()));
        assert_eq!(state.error(), Some("Error: 500"));
        assert!(state.data().is_none());
    }

    #[tokio::test]
    async fn it_loads_concurrently() {
        let (a, b) = tokio::join!(
            FetchState::load(async { Ok::<_, String>(1) }),
            FetchState::load(async { Err::<u8, _>("Error: Incorrect data".to_string()) }),
        );
        assert_eq!(a.into_result().unwrap(), 1);
        assert_eq!(b.error(), Some("Error: Incorrect data"));
        assert!(b.into_result().is_err());
    }

    #[test]
    fn it_serializes_with_a_state_tag() {
        let state = FetchState::Success(vec![1, 2]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "success");
        assert_eq!(json["value"][1], 2);
    }
}
