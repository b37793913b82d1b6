pub mod checks;
pub mod fetch;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod telemetry;
pub mod test_util;
