//! Domain layer - Records, keys, and pure derivations.
//!
//! Everything here is plain data plus pure functions: no storage, no
//! clock reads except through arguments. All records serialize to the
//! camelCase JSON shapes the web client persists.

pub mod activity;
pub mod address;
pub mod ids;
pub mod matching;
pub mod profile;
pub mod report;
pub mod stats;
pub mod validation;

// Re-export core types for convenience
pub use activity::{Activity, ActivityKind, NewActivity};
pub use address::{AddressError, WalletAddress};
pub use matching::{Match, MatchStatus, MatchUpdate, NewMatch};
pub use profile::{NewProfile, ProfileUpdate, UserProfile};
pub use report::{
    FoundItemReport, FoundItemUpdate, LostItemReport, LostItemUpdate, NewFoundItem, NewLostItem,
    ReportStatus,
};
pub use stats::UserStats;
pub use validation::{Validate, ValidationError};
