// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Carfare Providers
//!
//! Provider pricing policies and the comparison aggregator.
//!
//! Each provider module includes:
//!
//! - **Descriptor**: Metadata and CLI aliases
//! - **Pricing**: The provider's rule table and evaluator
//!
//! Most providers are a [`Tariff`] constant priced by [`TariffPricing`];
//! those with night or weekday packs implement
//! [`FeeEvaluator`](carfare_core::FeeEvaluator) directly on top of the same
//! tariff pieces.
//!
//! ## Supported Providers (11 total)
//!
//! | Provider | Packs | Night | Mileage | Max |
//! |----------|-------|-------|---------|-----|
//! | Times Car Share | cap 6h-72h | ✅ | 20/km over 6h | - |
//! | TOYOTA SHARE | cap 6h-24h | ❌ | 16/km over 6h | - |
//! | ENEOS Car Share | cap 6h-72h | ❌ | 18/km over 6h | 72h |
//! | Yasashii Car Share | cap 1h-72h | ❌ | 20/km over 6h | 72h |
//! | EveryGo | weekday 4h, 8h, 16h | ✅ | 17/km | 167h |
//! | e-Share Mobi | 6h-24h, multi-day | ✅ | free | 72h |
//! | Toyota Rent a Car | flat 3h-24h | ❌ | 15/km | - |
//! | Nippon Rent-A-Car | flat 6h-24h | ❌ | 15/km | - |
//! | Niconico Rent a Car | flat 12h-24h | ❌ | 15/km | - |
//! | Times Car Rental | flat 6h-24h | ❌ | 15/km | - |
//! | ORIX Rent a Car | flat 6h-24h | ❌ | 15/km | - |
//!
//! ## Usage
//!
//! ```ignore
//! use carfare_core::{QuoteRequest, WeekendCalendar};
//! use carfare_providers::{ProviderRegistry, compare};
//!
//! let registry = ProviderRegistry::builtin();
//! let request = QuoteRequest::for_hours(start, 3, 50.0)?;
//! let report = compare(&registry, &request, &WeekendCalendar);
//! let cheapest = report.cheapest();
//! ```

pub mod comparison;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod tariff;

// Provider modules (registry order)
pub mod times_car;
pub mod toyota_share;
pub mod eneos;
pub mod yasashii;
pub mod everygo;
pub mod eshare_mobi;
pub mod toyota_rent;
pub mod nippon_rent;
pub mod niconico_rent;
pub mod times_rent;
pub mod orix_rent;

// Re-export key types
pub use comparison::{ComparisonReport, ProviderQuote, compare, compare_window};
pub use descriptor::ProviderDescriptor;
pub use error::ProviderError;
pub use registry::{ProviderRegistry, RegistryOptions};
pub use tariff::{Tariff, TariffPricing};

// Re-export provider descriptors
pub use eneos::eneos_descriptor;
pub use eshare_mobi::eshare_mobi_descriptor;
pub use everygo::everygo_descriptor;
pub use niconico_rent::niconico_rent_descriptor;
pub use nippon_rent::nippon_rent_descriptor;
pub use orix_rent::orix_rent_descriptor;
pub use times_car::times_car_descriptor;
pub use times_rent::times_rent_descriptor;
pub use toyota_rent::toyota_rent_descriptor;
pub use toyota_share::toyota_share_descriptor;
pub use yasashii::yasashii_descriptor;

// Re-export plan classes
pub use eshare_mobi::EShareMobiPlan;
pub use everygo::EveryGoPlan;
