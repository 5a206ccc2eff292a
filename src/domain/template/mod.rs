//! Named-placeholder template system.
//!
//! This module provides:
//! - Placeholder tokens (`{identifier}`) and an ordered binding set
//! - The substitution engine that folds bindings over template text
//! - In-memory template storage with CRUD operations
//!
//! # Example
//!
//! ```ignore
//! let store = TemplateStore::new();
//!
//! store.create(Template::new(
//!     "order-shipped",
//!     "Order Shipped",
//!     "Order {order_id} is on its way via {carrier}",
//! ))?;
//!
//! let bindings = Bindings::new()
//!     .bind("order_id", "ORD-123")?
//!     .bind("carrier", "FedEx")?;
//!
//! let rendered = store.render("order-shipped", &bindings, UnboundPolicy::PassThrough)?;
//! ```

mod bindings;
mod store;
mod substitution;
mod types;

pub use bindings::{Bindings, Token};
pub use store::TemplateStore;
pub use substitution::{placeholders, render, render_with_policy, unbound_placeholders};
pub use types::{
    CreateTemplateRequest, RenderedTemplate, Template, TemplateError, TemplateListResponse,
    TemplateResult, UnboundPolicy, UpdateTemplateRequest, MAX_BODY_LEN,
};
