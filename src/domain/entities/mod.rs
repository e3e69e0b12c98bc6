pub mod weather;

pub use weather::WeatherRecord;
