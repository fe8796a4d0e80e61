mod health;
mod recognize;

pub use health::health_check;
pub use recognize::recognize_audio;
