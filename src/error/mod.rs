mod environment;

pub use environment::EnvironmentError;
