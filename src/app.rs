use crate::config::Config;
use crate::domain::ids::OrderIdGenerator;
use crate::Result;

/// Application-level state handed to the flows that place orders.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub order_ids: OrderIdGenerator,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let order_ids = OrderIdGenerator::starting_at(config.order_id_start);
        Ok(Self { config, order_ids })
    }
}
