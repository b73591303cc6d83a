//! Domain models for the application
use crate::errors::ApiResult;
use std::fmt;
use std::future::Future;
use tokio::sync::OnceCell;

pub mod airline;
pub mod airport;
pub mod flight;
pub mod flight_details;
pub mod timezone;
pub mod zone;

pub use airline::Airline;
pub use airport::{Airport, AirportDetails};
pub use flight::Flight;
pub use flight_details::FlightDetails;
pub use timezone::Timezone;
pub use zone::Zone;

/// Lazily fetched detail document attached to a model.
///
/// Concurrent first calls share one initialization; a failed fetch leaves the
/// cell empty. The cell takes no part in equality.
pub(crate) struct DetailCell<T>(OnceCell<T>);

impl<T> DetailCell<T> {
    pub(crate) async fn get_or_try_init<F, Fut>(&self, init: F) -> ApiResult<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        self.0.get_or_try_init(init).await
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.0.get()
    }
}

impl<T> Default for DetailCell<T> {
    fn default() -> Self {
        Self(OnceCell::new())
    }
}

impl<T: Clone> Clone for DetailCell<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for DetailCell<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for DetailCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(value) => f.debug_tuple("Fetched").field(value).finish(),
            None => f.write_str("NotFetched"),
        }
    }
}
