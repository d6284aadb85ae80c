mod config;
mod serializer;

pub use config::Config;
pub use serializer::render_documented_yaml;
