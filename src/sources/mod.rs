pub mod hh;
pub mod superjob;
pub mod traits;
pub mod types;

pub use hh::HeadHunterClient;
pub use superjob::SuperJobClient;
pub use traits::VacancySource;
