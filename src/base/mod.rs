mod amount;
pub mod column;
mod config;
mod customer;
pub mod fs;
pub mod layout;
pub mod loader;
pub mod masterlist;
pub mod normalize;
pub mod pipeline;
pub mod render;
mod table;
pub mod util;

#[cfg(test)]
pub mod testutil;

pub use amount::Amount;
pub use column::SchemaError;
pub use config::Config;
pub use config::OnRenderError;
pub use customer::CustomerKey;
pub use customer::CustomerRef;
pub use fs::Fs;
pub use layout::Layout;
pub use masterlist::Masterlist;
pub use masterlist::Project;
pub use normalize::Report;
pub use normalize::ReportRow;
pub use render::Renderer;
pub use table::Cell;
pub use table::Table;
