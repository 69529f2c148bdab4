pub mod store;
pub use store::{AgencyStore, BookingStore, CarStore, Stores, UserStore};
pub mod memory;
pub use memory::MemoryStore;

pub mod user_repo;
pub use user_repo::UserRepository;
pub mod agency_repo;
pub use agency_repo::AgencyRepository;
pub mod car_repo;
pub use car_repo::CarRepository;
pub mod booking_repo;
pub use booking_repo::BookingRepository;

use std::sync::Arc;

use sqlx::PgPool;

impl Stores {
    /// All four collections backed by the shared Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            agencies: Arc::new(AgencyRepository::new(pool.clone())),
            cars: Arc::new(CarRepository::new(pool.clone())),
            bookings: Arc::new(BookingRepository::new(pool)),
        }
    }
}
