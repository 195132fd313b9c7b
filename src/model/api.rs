use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// One page of a list endpoint plus the row count of the whole, unpaged query.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LazyResultDto<T> {
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Default for LazyResultDto<T> {
    fn default() -> Self {
        Self {
            count: 0,
            data: Vec::new(),
        }
    }
}
