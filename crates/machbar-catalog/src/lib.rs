//! # machbar-catalog
//!
//! The skill catalog consulted by the classifier. It holds two ordered tables:
//!
//! - **in-house skills** the team produces directly, each with an average-hours
//!   estimate and a complexity tier
//! - **partner skills** that need an outside vendor, each with a partner name,
//!   a price range and a timeline
//!
//! Every entry carries a set of lower-case keywords. An entry matches a request
//! when any of its keywords is a substring of the lower-cased request text.
//!
//! The built-in table ships with the binary. A catalog can also be loaded once
//! at startup from a TOML file:
//!
//! ```toml
//! [[inhouse]]
//! name = "Static Ads (Feed/Story)"
//! avg_hours = 4
//! complexity = "low"
//! keywords = ["static ad", "feed ad"]
//!
//! [[external]]
//! name = "Fotoshooting"
//! partner = "Fotostudio A"
//! price_range = "2.000–5.000 €"
//! timeline = "1–2 Wochen"
//! keywords = ["fotoshooting", "shooting"]
//! ```

mod builtin;
pub mod definition;
pub mod registry;

pub use definition::{InhouseSkill, PartnerSkill};
pub use registry::{Catalog, CatalogMatches};
