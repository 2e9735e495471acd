mod admin;
mod inquiry;
mod pages;
mod pricing;
mod product;
mod quote;
mod service;
mod site;
mod staff;

pub use admin::*;
pub use inquiry::*;
pub use pages::*;
pub use pricing::*;
pub use product::*;
pub use quote::*;
pub use service::*;
pub use site::*;
pub use staff::*;
