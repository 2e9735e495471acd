pub mod inquiry_queries;
pub mod pricing_queries;
pub mod product_queries;
pub mod quote_queries;
pub mod service_queries;
pub mod site_queries;
pub mod staff_queries;
