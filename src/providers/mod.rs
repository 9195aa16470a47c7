mod service_provider;

pub use service_provider::{ServiceProvider, ServiceProviderProps};
