use crate::client::model::error::ApiError;

#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the accessors on each cache state.
    ///
    /// Expected: data only when fetched, error only when failed
    #[test]
    fn exposes_data_and_error_by_state() {
        let fetched = Cache::Fetched(vec![1, 2]);
        let failed: Cache<Vec<i32>> = Cache::Error(ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        });

        assert_eq!(fetched.data(), Some(&vec![1, 2]));
        assert!(fetched.error().is_none());
        assert!(failed.data().is_none());
        assert_eq!(failed.error().map(|err| err.status), Some(502));
        assert!(Cache::<()>::NotFetched.data().is_none());
    }
}
