pub mod health;

pub use self::health::model::HealthResponse;
