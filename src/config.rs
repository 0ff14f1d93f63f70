use clap::{Parser, ValueEnum};

use crate::domain::ids::OrderIdGenerator;
use crate::{CatalogError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "retail-catalog")]
#[command(about = "Runs the retail catalog demonstration flow")]
pub struct Config {
    #[arg(long, env = "RETAIL_CATALOG_VERBOSE", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, env = "RETAIL_CATALOG_FORMAT", default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, env = "RETAIL_CATALOG_ORDER_ID_START", default_value_t = OrderIdGenerator::FIRST_ID)]
    pub order_id_start: u64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.order_id_start == 0 {
            return Err(CatalogError::Config { message: "order id start must be at least 1".to_string() });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { verbose: false, format: ReportFormat::Text, order_id_start: OrderIdGenerator::FIRST_ID }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from(["retail-catalog", "--format", "json", "--order-id-start", "42", "--verbose"]).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.order_id_start, 42);
        assert!(config.verbose);
    }

    #[test]
    fn test_validate_rejects_zero_start() {
        let config = Config { order_id_start: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(CatalogError::Config { .. })));
        assert!(Config::default().validate().is_ok());
    }
}
